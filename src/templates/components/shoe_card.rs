use crate::domain::{badge_for, format_price, pluralize, ShoeListing, Variant};
use chrono::NaiveDate;
use maud::{html, Markup};

/// Card for one listing, linking to its detail page.
pub fn shoe_card(shoe: &ShoeListing, today: NaiveDate) -> Markup {
    let variant = shoe.variant(today);

    html! {
        a class="shoe-link" href=(format!("/shoe/{}", shoe.slug)) {
            article class="shoe-card" {
                div class="shoe-image-wrapper" data-variant=(variant.as_str()) {
                    img class="shoe-image" alt="" src=(shoe.image_src);
                    @if let Some(badge) = badge_for(variant) {
                        span class="shoe-badge" style=(format!("background-color: {};", badge.color)) {
                            (badge.label)
                        }
                    }
                }
                div class="spacer" style="height: 12px;" {}
                div class="shoe-row" {
                    h3 class="shoe-name" { (shoe.name) }
                    (price_tag(shoe, variant))
                }
                div class="shoe-row" {
                    p class="shoe-colors" { (pluralize("Color", shoe.num_of_colors)) }
                }
            }
        }
    }
}

fn price_tag(shoe: &ShoeListing, variant: Variant) -> Markup {
    html! {
        @match (variant, shoe.sale_price) {
            (Variant::OnSale, Some(sale)) => {
                span class="shoe-price shoe-price--struck" { (format_price(shoe.price)) }
                span class="shoe-sale-price" { (format_price(sale)) }
            },
            _ => span class="shoe-price" { (format_price(shoe.price)) },
        }
    }
}
