//! 盒子区块渲染
//!
//! 所有展示都由 [`BoxView`] 推导，没有独立状态。

use uuid::Uuid;

use super::model::BoxView;
use crate::app::catalog::{format_price, CatalogItem};
use crate::core::assets::AssetPaths;
use crate::core::html::{classes, escape};
use crate::site::FaraalBoxConfig;
use crate::widgets::icon::Icon;

/// 结账按钮文字
pub fn checkout_label(view: &BoxView) -> String {
    if view.is_full {
        "Proceed to Checkout".to_string()
    } else {
        format!("Add {} more to checkout", view.remaining)
    }
}

fn render_snack(item: &CatalogItem, box_id: Uuid, is_full: bool, assets: &AssetPaths) -> String {
    let quantity = item
        .quantity_label
        .as_deref()
        .map(|q| format!(r#"<span class="text-xs text-gray-400 block mt-0.5">{}</span>"#, escape(q)))
        .unwrap_or_default();

    format!(
        r#"<div class="{card}" data-item-id="{id}" title="{caption}">
<div class="relative w-full aspect-square rounded-lg mb-4 overflow-hidden bg-gray-100"><img src="{img}" alt="{name}" class="w-full h-full object-cover" draggable="false"></div>
<div class="flex justify-between items-end">
<div><h4 class="font-serif text-[#8B4513] font-semibold">{name}</h4><span class="text-sm text-gray-500">{price}</span>{quantity}</div>
<form method="post" action="{action}"><input type="hidden" name="item_id" value="{id}"><button type="submit" class="add-button w-8 h-8 rounded-full bg-[#8B4513] text-white flex items-center justify-center" aria-label="Add {name} to box"{disabled}>{plus}</button></form>
</div>
</div>"#,
        card = classes(&[
            ("snack-card bg-white p-4 rounded-xl border border-[#F5E6D3] relative cursor-grab", true),
            ("opacity-50 cursor-not-allowed", is_full),
        ]),
        id = escape(&item.id),
        caption = escape(&item.price_caption()),
        img = escape(&assets.resolve(&item.image_ref)),
        name = escape(&item.name),
        price = format_price(item.price),
        quantity = quantity,
        action = escape(&assets.link(&format!("/box/{}/add", box_id))),
        disabled = if is_full { " disabled" } else { "" },
        plus = Icon::Plus.svg("w-4 h-4"),
    )
}

/// 盒子面板：总价、容量条、内容列表、结账按钮
pub fn render_panel(box_id: Uuid, view: &BoxView, pulse: bool, assets: &AssetPaths) -> String {
    let empty_state = if view.count == 0 {
        format!(
            r#"<div class="h-48 flex flex-col items-center justify-center text-gray-400 border border-gray-100 rounded-lg bg-gray-50/50"><p>Your box is empty</p><p class="text-xs mt-1 text-gray-400">Add {} packets to continue</p></div>"#,
            view.max_capacity
        )
    } else {
        String::new()
    };

    let remove_action = escape(&assets.link(&format!("/box/{}/remove", box_id)));
    let entries: String = view
        .entries
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="box-entry flex items-center gap-3 bg-[#FDFBF7] p-3 rounded-lg border border-[#F5E6D3]" data-unique-id="{uid}">
<div class="relative w-10 h-10 rounded-full overflow-hidden bg-gray-100"><img src="{img}" alt="{name}" class="w-full h-full object-cover"></div>
<div class="flex-1 min-w-0"><p class="text-sm font-medium text-[#8B4513] truncate">{name}</p><p class="text-xs text-gray-500">{price}</p></div>
<form method="post" action="{action}"><input type="hidden" name="unique_id" value="{uid}"><button type="submit" class="text-gray-400 hover:text-red-500" aria-label="Remove item">&times;</button></form>
</div>"#,
                uid = escape(&entry.unique_id),
                img = escape(&assets.resolve(&entry.item.image_ref)),
                name = escape(&entry.item.name),
                price = format_price(entry.item.price),
                action = remove_action,
            )
        })
        .collect();

    let ready = if view.is_full {
        r#"<p class="text-center text-green-600 text-xs mt-3">Perfect box! Ready to ship.</p>"#
    } else {
        ""
    };

    format!(
        r#"<div id="box-panel" class="{panel}" data-box-id="{box_id}" data-count="{count}" data-capacity="{capacity}">
<div class="flex justify-between items-center mb-6">
<h3 class="text-xl font-serif text-[#8B4513] flex items-center gap-2">{bag} Your Box</h3>
<div class="text-right"><span class="block text-xs text-gray-400 uppercase tracking-wider">Total</span><span class="box-total text-lg font-bold text-[#D97706]">{total}</span></div>
</div>
<div class="w-full h-3 bg-gray-100 rounded-full mb-6 overflow-hidden"><div class="{bar}" style="width:{fill}%"></div></div>
{empty_state}
<div class="space-y-3 min-h-[100px]">{entries}</div>
<div class="mt-8 border-t border-dashed border-gray-200 pt-6">
<form method="get" action="{checkout}"><input type="hidden" name="box" value="{box_id}"><button type="submit" class="{button}"{disabled}>{label}</button></form>
{ready}
</div>
</div>"#,
        panel = classes(&[
            ("box-panel bg-white rounded-2xl shadow-xl border-2 border-dashed p-6 relative overflow-hidden", true),
            ("border-[#D97706]/30", !view.is_full),
            ("border-green-500/50 bg-green-50/30", view.is_full),
            ("pulse", pulse),
        ]),
        box_id = box_id,
        count = view.count,
        capacity = view.max_capacity,
        bag = Icon::ShoppingBag.svg("w-5 h-5"),
        total = format_price(view.total),
        bar = classes(&[
            ("h-full", true),
            ("bg-green-500", view.is_full),
            ("bg-[#D97706]", !view.is_full),
        ]),
        fill = view.fill_percent,
        empty_state = empty_state,
        entries = entries,
        checkout = escape(&assets.link("/checkout")),
        button = classes(&[
            ("w-full py-4 rounded-xl font-serif text-lg", true),
            ("bg-[#8B4513] text-white", view.is_full),
            ("bg-gray-200 text-gray-500", !view.is_full),
        ]),
        disabled = if view.count == 0 { " disabled" } else { "" },
        label = checkout_label(view),
        ready = ready,
    )
}

/// 首页的完整盒子区块
pub fn render_section(
    config: &FaraalBoxConfig,
    box_id: Uuid,
    view: &BoxView,
    pulse: bool,
    assets: &AssetPaths,
) -> String {
    let snacks: String = config
        .snacks
        .iter()
        .map(|item| render_snack(item, box_id, view.is_full, assets))
        .collect();

    format!(
        r#"<section id="faraal-box" class="bg-[#FDFBF7] rounded-3xl border border-[#F5E6D3] shadow-xl overflow-hidden mb-16" data-box-id="{box_id}" data-threshold="{threshold}" data-api="{api}">
<div class="p-10 md:p-16">
<div class="text-center mb-10"><h2 class="text-3xl md:text-5xl font-serif font-bold text-[#8B4513] mb-4">{title}</h2><p class="text-gray-600 text-base md:text-lg">{description}</p></div>
<div class="grid lg:grid-cols-12 gap-6 items-start">
<div class="lg:col-span-7 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4">{snacks}</div>
<div class="lg:col-span-5 sticky top-24">{panel}</div>
</div>
</div>
</section>"#,
        box_id = box_id,
        threshold = config.drop_threshold,
        api = escape(&assets.link(&format!("/api/box/{}", box_id))),
        title = escape(&config.title),
        description = escape(&config.description),
        snacks = snacks,
        panel = render_panel(box_id, view, pulse, assets),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::faraal_box::model::FaraalBox;

    fn snack() -> CatalogItem {
        CatalogItem {
            id: "2".to_string(),
            name: "Bhajani Chakli".to_string(),
            price: 150,
            quantity_label: Some("1 kg".to_string()),
            image_ref: "/assets/chakali.png".to_string(),
            color: None,
        }
    }

    #[test]
    fn test_empty_box_panel() {
        let view = BoxView::from(&FaraalBox::new(4));
        let html = render_panel(Uuid::nil(), &view, false, &AssetPaths::default());
        assert!(html.contains("Your box is empty"));
        assert!(html.contains("Add 4 packets to continue"));
        assert!(html.contains("Add 4 more to checkout"));
        assert!(html.contains(" disabled>"));
        assert!(html.contains("width:0%"));
    }

    #[test]
    fn test_full_box_panel() {
        let mut faraal_box = FaraalBox::new(4);
        for _ in 0..4 {
            faraal_box.add_item(&snack()).unwrap();
        }
        let view = BoxView::from(&faraal_box);
        let html = render_panel(Uuid::nil(), &view, true, &AssetPaths::default());
        assert!(html.contains("Proceed to Checkout"));
        assert!(html.contains("Perfect box! Ready to ship."));
        assert!(html.contains("width:100%"));
        assert!(html.contains("₹600"));
        assert!(html.contains(" pulse\""));
        assert!(!html.contains("Your box is empty"));
    }

    #[test]
    fn test_checkout_label_counts_remaining() {
        let mut faraal_box = FaraalBox::new(4);
        faraal_box.add_item(&snack()).unwrap();
        assert_eq!(
            checkout_label(&BoxView::from(&faraal_box)),
            "Add 3 more to checkout"
        );
    }
}
