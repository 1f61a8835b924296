use crate::domain::{format_price, Cents, ShoeListing, Variant};
use crate::templates::{desktop_layout, shoe_card};
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn shoe_page(shoe: &ShoeListing, today: NaiveDate) -> Markup {
    let variant = shoe.variant(today);

    desktop_layout(
        &shoe.name,
        html! {
            main class="container shoe-detail" {
                (shoe_card(shoe, today))

                dl class="shoe-facts" {
                    dt { "Released" }
                    dd { (shoe.release_date.format("%B %-d, %Y")) }

                    @if let (Variant::OnSale, Some(sale)) = (variant, shoe.sale_price) {
                        dt { "You save" }
                        dd { (format_price(savings(shoe.price, sale))) }
                    }
                }

                p { a href="/" { "← Back to all shoes" } }
            }
        },
    )
}

/// Zero when the sale price is not below the list price.
fn savings(price: Cents, sale: Cents) -> Cents {
    Cents(price.0.saturating_sub(sale.0))
}
