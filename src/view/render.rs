//! HTML rendering for the landing and planner pages.
//!
//! Every value that comes from the user or the backend goes through
//! `html_escape` before it reaches the markup.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::page::Page;
use crate::menu::{MealType, Recommendation};
use crate::profile::{ActivityLevel, ComputedProfile, Sex};
use crate::reveal::{observer_script, Reveal, RevealTarget};
use crate::theme::Theme;

const STYLE: &str = r#"
:root { --bg: #fafaf7; --fg: #1d1d1b; --accent: #2f855a; }
[data-theme="dark"] { --bg: #151714; --fg: #ecece6; --accent: #68d391; }
body { background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; margin: 0; }
.hidden { display: none !important; }
.sidebar { position: fixed; inset: 0 auto 0 0; width: 22rem; transform: translateX(-100%); transition: transform .2s; background: var(--bg); overflow-y: auto; padding: 1rem; }
.sidebar.open { transform: none; }
.overlay.visible { position: fixed; inset: 0; background: rgba(0,0,0,.4); }
.profile-btn.configured { color: var(--accent); }
.alert { border: 1px solid #c53030; padding: .75rem; margin: 1rem; }
.js [data-reveal] { opacity: 0; transform: translateY(16px); transition: all .6s ease var(--delay, 0ms); }
.js [data-reveal].is-visible { opacity: 1; transform: none; }
"#;

fn num(v: f64) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    format!("{rounded}")
}

fn head(out: &mut String, theme: Theme, title: &str) {
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"pt-BR\" data-theme=\"{}\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n",
        theme.as_str(),
        text(title),
        STYLE
    );
}

/// Sections of the landing page, in scroll order, with their stagger.
pub fn landing_sections() -> Vec<(RevealTarget, &'static str, &'static str)> {
    vec![
        (
            RevealTarget::new("hero"),
            "Tara",
            "Porções ideais para o seu prato, calculadas a partir do seu perfil.",
        ),
        (
            RevealTarget::delayed("perfil", 100),
            "Seu perfil",
            "Peso, altura, idade e rotina viram uma meta calórica diária e macros.",
        ),
        (
            RevealTarget::delayed("cardapio", 200),
            "Qualquer cardápio",
            "Cole o cardápio do restaurante e receba as escolhas em gramas.",
        ),
        (
            RevealTarget::delayed("app", 300),
            "Também no Android",
            "Baixe o aplicativo e leve a Tara para o almoço.",
        ),
    ]
}

/// Landing page. Sections listed in `revealed` are already visible; the
/// observer script reveals the rest as they scroll into view.
pub fn render_landing(theme: Theme, revealed: &[Reveal]) -> String {
    let mut out = String::with_capacity(4096);
    head(&mut out, theme, "Tara");
    out.push_str("<body>\n<main class=\"landing\">\n");
    for (target, title, body) in landing_sections() {
        let _ = write!(out, "<section id=\"{}\"", attr(&target.id));
        if let Some(shown) = revealed.iter().find(|r| r.target == target.id) {
            let _ = write!(out, " class=\"{}\"", shown.class);
        }
        out.push_str(" data-reveal");
        if let Some(ms) = target.delay_ms {
            let _ = write!(out, " data-delay=\"{ms}\"");
        }
        if let Some(style) = target.delay_style() {
            let _ = write!(out, " style=\"{}\"", attr(&style));
        }
        let _ = write!(out, ">\n<h2>{}</h2>\n<p>{}</p>\n</section>\n", text(title), text(body));
    }
    out.push_str("<a class=\"cta\" href=\"/app\">Começar</a>\n</main>\n");
    let _ = write!(out, "<script>\n{}\n</script>\n</body>\n</html>\n", observer_script());
    out
}

pub fn render_stats(profile: &ComputedProfile) -> String {
    let t = &profile.targets;
    let mut out = String::new();
    for (value, label) in [
        (t.target_calories.to_string(), "Calorias/dia"),
        (format!("{}g", num(t.macros.protein_g)), "Proteína"),
        (format!("{}g", num(t.macros.carbs_g)), "Carboidratos"),
        (format!("{}g", num(t.macros.fat_g)), "Gordura"),
    ] {
        let _ = write!(
            out,
            "<div class=\"stat-item\">\n<div class=\"stat-value\">{}</div>\n\
             <div class=\"stat-label\">{}</div>\n</div>\n",
            text(&value),
            label
        );
    }

    if !t.meals.is_empty() {
        out.push_str("<ul class=\"meal-targets\">\n");
        for (meal, target) in &t.meals {
            let _ = writeln!(
                out,
                "<li data-meal=\"{}\"><strong>{}</strong> {}% · {} kcal</li>",
                meal.as_str(),
                text(&target.nome),
                target.percentual,
                num(target.calorias)
            );
        }
        out.push_str("</ul>\n");
    }

    if let Some(bc) = &t.body_composition {
        let _ = writeln!(
            out,
            "<div class=\"body-composition\">Gordura corporal {}% · massa magra {} kg</div>",
            num(bc.body_fat_percent),
            num(bc.lean_mass_kg)
        );
    }
    out
}

pub fn render_recommendation(rec: &Recommendation) -> String {
    let mut out = String::new();
    for item in &rec.escolhas {
        let _ = write!(
            out,
            "<div class=\"food-item\">\n\
             <div class=\"food-header\">\n\
             <span class=\"food-name\">{}</span>\n\
             <span class=\"food-grams\">{}g</span>\n\
             </div>\n\
             <div class=\"food-macros\">\n\
             <span>{} kcal</span>\n<span>P: {}g</span>\n<span>C: {}g</span>\n<span>G: {}g</span>\n\
             </div>\n\
             <div class=\"food-justification\">&quot;{}&quot;</div>\n\
             </div>\n",
            text(&item.alimento),
            num(item.gramas),
            num(item.calorias_estimadas),
            num(item.proteina_g),
            num(item.carboidrato_g),
            num(item.gordura_g),
            text(&item.justificativa)
        );
    }

    let total = &rec.total;
    let _ = write!(
        out,
        "<div class=\"totals\">\n<h4>Total da Refeição</h4>\n<div class=\"totals-grid\">\n\
         <div class=\"total-item\"><strong>{}</strong><span>kcal</span></div>\n\
         <div class=\"total-item\"><strong>{}g</strong><span>proteína</span></div>\n\
         <div class=\"total-item\"><strong>{}g</strong><span>carbs</span></div>\n\
         <div class=\"total-item\"><strong>{}g</strong><span>gordura</span></div>\n\
         </div>\n</div>\n",
        num(total.calorias),
        num(total.proteina_g),
        num(total.carboidrato_g),
        num(total.gordura_g)
    );

    if let Some(tip) = rec.tip() {
        let _ = write!(
            out,
            "<div class=\"tip\">\n<strong>💡 Dica:</strong> {}\n</div>\n",
            text(tip)
        );
    }
    out
}

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

fn input(out: &mut String, label: &str, id: &str, name: &str, value: &str, extra: &str) {
    let _ = write!(
        out,
        "<label for=\"{id}\">{label}</label>\n\
         <input type=\"number\" id=\"{id}\" name=\"{name}\" value=\"{}\" {extra}>\n",
        attr(value)
    );
}

fn select(out: &mut String, label: &str, id: &str, name: &str, current: &str, options: &[(&str, &str)]) {
    let _ = writeln!(out, "<label for=\"{id}\">{label}</label>\n<select id=\"{id}\" name=\"{name}\">");
    for (value, caption) in options {
        let selected = if *value == current { " selected" } else { "" };
        let _ = writeln!(out, "<option value=\"{value}\"{selected}>{}</option>", text(caption));
    }
    out.push_str("</select>\n");
}

fn profile_form(out: &mut String, page: &Page) {
    let f = &page.profile_form;
    out.push_str("<form id=\"profile-form\" method=\"post\" action=\"/app/profile\">\n");
    input(out, "Peso (kg)", "weight", "weight", &f.weight, "step=\"0.1\" min=\"1\" required");
    input(out, "Altura (cm)", "height", "height", &f.height, "step=\"0.1\" min=\"1\" required");
    input(out, "Idade", "age", "age", &f.age, "step=\"1\" min=\"1\" required");
    let sexes: Vec<_> = Sex::ALL.iter().map(|s| (s.as_str(), s.label())).collect();
    select(out, "Sexo", "sex", "sex", &f.sex, &sexes);
    let levels: Vec<_> = ActivityLevel::ALL
        .iter()
        .map(|a| (a.as_str(), a.label()))
        .collect();
    select(out, "Atividade física", "activity", "activity", &f.activity, &levels);
    input(out, "Déficit (%)", "deficit", "deficit", &f.deficit, "step=\"1\" min=\"1\" max=\"100\"");
    input(out, "Refeições por dia", "meals-per-day", "meals-per-day", &f.meals_per_day, "step=\"1\" min=\"1\" max=\"12\"");
    input(out, "Gordura corporal (%)", "body-fat", "body-fat", &f.body_fat, "step=\"0.1\"");
    input(out, "Massa magra (kg)", "lean-mass", "lean-mass", &f.lean_mass, "step=\"0.1\"");
    out.push_str("<button type=\"submit\">Calcular</button>\n</form>\n");
}

fn menu_form(out: &mut String, page: &Page) {
    let current = page.menu_form.meal();
    let _ = write!(
        out,
        "<form id=\"menu-form\" method=\"post\" action=\"/app/analyze\">\n\
         <label for=\"menu\">Cardápio</label>\n\
         <textarea id=\"menu\" name=\"menu\" rows=\"8\" required>{}</textarea>\n",
        text(&page.menu_form.menu)
    );
    let meals: Vec<_> = MealType::ALL.iter().map(|m| (m.as_str(), m.label())).collect();
    select(out, "Refeição", "meal-type", "meal-type", current.as_str(), &meals);
    out.push_str("<button type=\"submit\" id=\"analyze-btn\">Analisar</button>\n</form>\n");
}

pub fn render_planner(page: &Page) -> String {
    let mut out = String::with_capacity(8192);
    head(&mut out, page.theme, "Tara · Planejador");
    out.push_str("<body>\n<header>\n");
    let configured = if page.status.is_configured() { " configured" } else { "" };
    let _ = write!(
        out,
        "<a id=\"profile-btn\" class=\"profile-btn{configured}\" href=\"/app?sidebar=open\">\
         <span id=\"profile-status\">{}</span></a>\n\
         <form method=\"post\" action=\"/app/theme\">\
         <button id=\"theme-toggle\" type=\"submit\" aria-label=\"Alternar tema\">{}</button></form>\n\
         </header>\n",
        text(page.status.label()),
        match page.theme {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    );

    for message in &page.alerts {
        let _ = writeln!(out, "<div class=\"alert\" role=\"alert\">{}</div>", text(message));
    }

    let open = if page.sidebar_open { " open" } else { "" };
    let _ = writeln!(out, "<aside id=\"sidebar\" class=\"sidebar{open}\">");
    profile_form(&mut out, page);
    let _ = write!(
        out,
        "<div id=\"profile-stats\" class=\"profile-stats{}\">\n<div id=\"stats\">\n",
        hidden(page.stats.is_some())
    );
    if let Some(stats) = &page.stats {
        out.push_str(&render_stats(stats));
    }
    out.push_str("</div>\n</div>\n</aside>\n");
    let visible = if page.sidebar_open { " visible" } else { "" };
    let _ = writeln!(out, "<a id=\"overlay\" class=\"overlay{visible}\" href=\"/app\"></a>");

    out.push_str("<main>\n");
    menu_form(&mut out, page);
    let _ = writeln!(
        out,
        "<div id=\"loading\" class=\"loading{}\">Analisando cardápio…</div>",
        hidden(page.loading.is_visible())
    );
    let _ = write!(
        out,
        "<section id=\"results-section\" class=\"results{}\">\n<div id=\"recommendation\">\n",
        hidden(page.results_visible())
    );
    if let Some(rec) = &page.recommendation {
        out.push_str(&render_recommendation(rec));
    }
    out.push_str("</div>\n</section>\n</main>\n</body>\n</html>\n");
    out
}
