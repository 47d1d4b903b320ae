//! 结账页面渲染

use super::model::{CheckoutForm, FieldErrors, OrderConfirmation, PaymentMethod};
use crate::app::catalog::format_price;
use crate::app::faraal_box::BoxView;
use crate::core::assets::AssetPaths;
use crate::core::html::escape;

fn field(
    label: &str,
    name: &str,
    kind: &str,
    value: &str,
    errors: &FieldErrors,
    wide: bool,
) -> String {
    let error = errors
        .get(name)
        .map(|msg| {
            format!(
                r#"<p class="field-error text-sm text-red-600 mt-1">{}</p>"#,
                escape(msg)
            )
        })
        .unwrap_or_default();
    let input = if kind == "textarea" {
        format!(
            r#"<textarea id="{name}" name="{name}" rows="3" required class="w-full px-4 py-3 border border-gray-300 rounded-lg">{value}</textarea>"#,
            name = name,
            value = escape(value)
        )
    } else {
        format!(
            r#"<input id="{name}" type="{kind}" name="{name}" value="{value}" required class="w-full px-4 py-3 border border-gray-300 rounded-lg">"#,
            name = name,
            kind = kind,
            value = escape(value)
        )
    };
    format!(
        r#"<div{}><label for="{}" class="block text-sm font-medium text-gray-700 mb-2">{} *</label>{}{}</div>"#,
        if wide { r#" class="md:col-span-2""# } else { "" },
        name,
        escape(label),
        input,
        error
    )
}

fn payment_option(method: PaymentMethod, selected: PaymentMethod, hint: &str) -> String {
    format!(
        r#"<label class="flex items-center gap-3 p-4 border-2 border-gray-200 rounded-lg cursor-pointer"><input type="radio" name="payment_method" value="{}"{}><div><div class="font-semibold text-gray-900">{}</div><div class="text-sm text-gray-600">{}</div></div></label>"#,
        method.value(),
        if method == selected { " checked" } else { "" },
        method.label(),
        hint
    )
}

fn order_summary(summary: Option<&BoxView>, delivery_areas: &[String]) -> String {
    let (items, total) = summary
        .map(|v| {
            let lines: String = v
                .entries
                .iter()
                .map(|e| {
                    format!(
                        r#"<div class="flex justify-between text-sm text-gray-600"><span>{}</span><span>{}</span></div>"#,
                        escape(&e.item.name),
                        format_price(e.item.price)
                    )
                })
                .collect();
            (lines, v.total)
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-50 rounded-xl border border-gray-200 p-6 sticky top-24">
<h2 class="text-xl font-semibold text-gray-900 mb-6">Order Summary</h2>
<div class="space-y-2 mb-4">{items}</div>
<div class="space-y-4 mb-6">
<div class="flex justify-between text-gray-600"><span>Subtotal</span><span>{total}</span></div>
<div class="flex justify-between text-gray-600"><span>Delivery</span><span>Free</span></div>
<div class="border-t border-gray-200 pt-4 flex justify-between text-lg font-bold text-gray-900"><span>Total</span><span class="order-total">{total}</span></div>
</div>
<div class="bg-amber-50 border border-amber-200 rounded-lg p-4 text-sm text-gray-700">
<p class="font-semibold mb-1">Delivery Areas:</p><p>{areas}</p>
<p class="mt-2 text-xs text-gray-600">Same-day delivery available for orders placed before 2 PM</p>
</div>
</div>"#,
        items = items,
        total = format_price(total),
        areas = escape(&delivery_areas.join(", ")),
    )
}

pub fn render_form(
    form: &CheckoutForm,
    errors: &FieldErrors,
    summary: Option<&BoxView>,
    delivery_areas: &[String],
    assets: &AssetPaths,
) -> String {
    let box_id = form.box_id.as_deref().unwrap_or_default();
    format!(
        r#"<div class="max-w-6xl mx-auto px-4 md:px-8 py-12">
<a href="{home}" class="inline-flex items-center gap-2 text-gray-600 hover:text-gray-900 mb-8">&larr; <span>Continue Shopping</span></a>
<div class="grid md:grid-cols-3 gap-8">
<div class="md:col-span-2">
<h1 class="text-3xl font-serif font-bold text-gray-900 mb-8">Checkout</h1>
<form id="checkout-form" method="post" action="{action}" class="space-y-6">
<input type="hidden" name="box_id" value="{box_id}">
<div class="bg-white rounded-xl border border-gray-200 p-6"><h2 class="text-xl font-semibold text-gray-900 mb-4">Contact Information</h2>
<div class="grid md:grid-cols-2 gap-4">{name}{phone}{email}</div></div>
<div class="bg-white rounded-xl border border-gray-200 p-6"><h2 class="text-xl font-semibold text-gray-900 mb-4">Delivery Address</h2>
<div class="space-y-4">{address}<div class="grid md:grid-cols-2 gap-4">{city}{pincode}</div></div></div>
<div class="bg-white rounded-xl border border-gray-200 p-6"><h2 class="text-xl font-semibold text-gray-900 mb-4">Payment Method</h2>
<div class="space-y-3">{cod}{online}</div></div>
<button type="submit" class="w-full py-4 bg-gray-900 text-white font-semibold rounded-xl" data-busy-label="Processing...">Place Order</button>
</form>
</div>
<div class="md:col-span-1">{summary}</div>
</div>
</div>"#,
        home = escape(&assets.link("/")),
        action = escape(&assets.link("/checkout")),
        box_id = escape(box_id),
        name = field("Full Name", "name", "text", &form.name, errors, false),
        phone = field("Phone Number", "phone", "tel", &form.phone, errors, false),
        email = field("Email", "email", "email", &form.email, errors, true),
        address = field("Address", "address", "textarea", &form.address, errors, false),
        city = field("City", "city", "text", &form.city, errors, false),
        pincode = field("Pincode", "pincode", "text", &form.pincode, errors, false),
        cod = payment_option(
            PaymentMethod::CashOnDelivery,
            form.payment_method,
            "Pay when you receive"
        ),
        online = payment_option(PaymentMethod::Online, form.payment_method, "Pay securely online"),
        summary = order_summary(summary, delivery_areas),
    )
}

pub fn render_success(order: &OrderConfirmation, assets: &AssetPaths) -> String {
    format!(
        r#"<div class="max-w-2xl mx-auto px-4 md:px-8 py-20 text-center">
<div class="bg-green-50 rounded-2xl p-12 border border-green-200">
<h1 class="text-3xl font-serif font-bold text-gray-900 mb-4">Order Placed Successfully!</h1>
<p class="text-gray-600 mb-4">Thank you for your order. We'll prepare your fresh batch and deliver it soon.</p>
<p class="text-sm text-gray-500 mb-8">Order <span class="order-id">{}</span> &middot; {} &middot; {}</p>
<a href="{}" class="inline-flex items-center gap-2 px-6 py-3 bg-gray-900 text-white font-semibold rounded-xl">&larr; Back to Home</a>
</div>
</div>"#,
        escape(&order.order_id),
        order.payment_method.label(),
        format_price(order.total),
        escape(&assets.link("/"))
    )
}
