use maud::{html, Markup, PreEscaped, DOCTYPE};

// Theme flip is stateless and purely client-side: toggle the document
// class and swap which of the two search triggers is visible.
const THEME_SCRIPT: &str = "
function toggleTheme() {
    document.documentElement.classList.toggle('dark');
    for (const id of ['search-trigger', 'search-trigger-dark']) {
        const el = document.getElementById(id);
        if (el) el.toggleAttribute('hidden');
    }
}
";

pub fn page_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#eb5757"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        "staylist"
                    }
                    button id="theme-toggle" class="theme-toggle" type="button" onclick="toggleTheme()" {
                        "Dark mode"
                    }
                }
                (content)
                script { (PreEscaped(THEME_SCRIPT)) }
            }
        }
    }
}
