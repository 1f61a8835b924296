use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Sole&Ankle" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a class="logo" href="/" { "Sole&Ankle" }
                    nav {
                        ul {
                            li { a href="/?sort=newest" { "New Releases" } }
                            li { a href="/?sort=price" { "Price" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
