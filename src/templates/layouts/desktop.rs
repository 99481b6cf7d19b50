use chrono::{Datelike, Local};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
:root { --brand: #7c3aed; --brand-dark: #5b21b6; --muted: #6b7280; --line: #e5e7eb; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: #111827; background: #f9fafb; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,.06); }
header .brand { display: flex; align-items: center; gap: .5rem; color: var(--brand); font-weight: 700; font-size: 1.25rem; text-decoration: none; }
header nav ul { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
header nav a { color: #374151; text-decoration: none; }
.container { max-width: 64rem; margin: 0 auto; padding: 2.5rem 1rem; }
.narrow { max-width: 48rem; }
.card { background: #fff; border: 1px solid var(--line); border-radius: .75rem; padding: 1.5rem; margin-bottom: 1.5rem; }
.card-header { background: linear-gradient(90deg, var(--brand), #4f46e5); color: #fff; margin: -1.5rem -1.5rem 1.5rem; padding: 1.5rem; border-radius: .75rem .75rem 0 0; }
.btn { display: inline-block; background: var(--brand); color: #fff; border: 0; border-radius: .5rem; padding: .75rem 1.5rem; font-size: 1rem; text-decoration: none; cursor: pointer; }
.btn:hover { background: var(--brand-dark); }
.btn-outline { background: #fff; color: var(--brand); border: 1px solid var(--brand); }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); }
.feature h3 { margin-top: 0; }
.badge { display: inline-block; width: 2rem; height: 2rem; line-height: 2rem; text-align: center; border-radius: 999px; background: #ede9fe; color: var(--brand); font-weight: 700; margin-bottom: .75rem; }
.stat h3 { margin: 0; font-size: .875rem; color: var(--muted); font-weight: 500; }
.stat .value { font-size: 1.5rem; font-weight: 700; margin-top: .5rem; }
.price { font-size: 3rem; font-weight: 700; color: var(--brand); margin: 0; text-align: center; }
.progress { height: .5rem; background: var(--line); border-radius: 999px; overflow: hidden; }
.progress > div { height: 100%; background: var(--brand); }
.notice { background: #fef3c7; border: 1px solid #fcd34d; color: #92400e; padding: .75rem 1rem; border-radius: .5rem; margin-bottom: 1.5rem; }
.field { display: flex; flex-direction: column; gap: .25rem; margin-bottom: 1.25rem; }
.field input, .field select { padding: .6rem; border: 1px solid var(--line); border-radius: .5rem; font-size: 1rem; }
.field .hint { color: var(--muted); font-size: .85rem; }
.field-error { color: #b91c1c; font-size: .9rem; }
.checkbox { display: flex; justify-content: space-between; align-items: center; border: 1px solid var(--line); border-radius: .5rem; padding: 1rem; }
.hero { text-align: center; padding: 4rem 1rem; }
.hero h1 { font-size: 2.75rem; margin-bottom: 1rem; }
.lead { color: var(--muted); font-size: 1.15rem; }
footer { border-top: 1px solid var(--line); background: #fff; padding: 2rem 1.5rem; color: var(--muted); text-align: center; font-size: .9rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    let year = Local::now().year();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | HouseWise" }
                style { (PreEscaped(STYLES)) }
            }
            body {
              header {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#7c3aed"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      "HouseWise"
                  }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/predict" { "Predict" } }
                          li { a href="/about" { "About" } }
                      }
                  }

                  a href="/predict" class="btn" { "Get Started" }
              }
                (content)
              footer {
                  p { "© " (year) " HouseWise. All rights reserved." }
                  p { "Estimates are indicative only and are not a professional appraisal." }
              }
            }
        }
    }
}
