// templates/pages/home.rs

use crate::catalog::{Catalog, SortOrder};
use crate::templates::{desktop_layout, shoe_card};
use chrono::NaiveDate;
use maud::{html, Markup};

const SORT_OPTIONS: &[(SortOrder, &str)] = &[
    (SortOrder::Newest, "Newest Releases"),
    (SortOrder::Price, "Price"),
];

pub fn home_page(catalog: &Catalog, sort: SortOrder, today: NaiveDate) -> Markup {
    desktop_layout(
        "Running",
        html! {
            main class="container" {
                div class="grid-header" {
                    h1 { "Running" }
                    form method="get" action="/" {
                        label for="sort" { "Sort" }
                        select name="sort" id="sort" onchange="this.form.submit()" {
                            @for (order, label) in SORT_OPTIONS {
                                option value=(order.as_str()) selected[*order == sort] { (label) }
                            }
                        }
                        noscript { button type="submit" { "Apply" } }
                    }
                }

                section class="shoe-grid" {
                    @for shoe in catalog.sorted(sort) {
                        (shoe_card(shoe, today))
                    }
                }
            }
        },
    )
}
