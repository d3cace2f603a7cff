//! Retained-DOM renderer: one absolutely-positioned button per skill, an
//! SVG network of connecting lines behind them, a details/compare panel
//! below the galaxy and a polite live region. The core only hands over
//! per-item geometry; buttons give us hit-testing and keyboard focus for
//! free.

use std::cell::RefCell;

use anyhow::anyhow;
use galaxy_core::{link_opacity, link_pairs, Galaxy, Selection};
use web_sys as web;

use crate::dom;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const ORB_STATIC_STYLE: &str = "position:absolute;left:0;top:0;display:flex;align-items:center;\
    justify-content:center;border-radius:9999px;cursor:pointer;padding:0;color:#f8fafc;\
    font-weight:700;text-shadow:0 2px 6px rgba(0,0,0,0.6);z-index:10;";

const LINES_STYLE: &str =
    "position:absolute;inset:0;width:100%;height:100%;pointer-events:none;";

const LIVE_REGION_STYLE: &str = "position:absolute;width:1px;height:1px;overflow:hidden;\
    clip:rect(0 0 0 0);white-space:nowrap;";

const PANEL_STYLE: &str = "margin-top:16px;border-radius:8px;padding:12px;\
    background:rgba(255,255,255,0.05);color:rgba(255,255,255,0.9);font-size:14px;";

const COMPARE_GRID_STYLE: &str = "display:grid;grid-template-columns:1fr 1fr;gap:16px;";

const COMPARE_CELL_STYLE: &str =
    "padding:8px;background:rgba(255,255,255,0.03);border-radius:6px;";

const PANEL_BUTTON_STYLE: &str = "margin-right:8px;padding:4px 12px;border-radius:4px;\
    border:none;cursor:pointer;background:rgba(255,255,255,0.08);color:inherit;";

const BORDER_PLAIN: &str = "1px solid rgba(255,255,255,0.12)";
const BORDER_COMPARING: &str = "2px solid #ffffffaa";
const SHADOW_PLAIN: &str = "0 8px 22px rgba(0,0,0,0.55), 0 0 12px 2px rgba(255,255,255,0.02)";
const SHADOW_SELECTED: &str = "0 14px 40px rgba(0,0,0,0.7), 0 0 20px 6px rgba(255,255,255,0.04)";

const HINT_TEXT: &str = "Click an orb to view details. Double-click an orb to toggle compare. \
    Keyboard: arrows rotate, +/- zoom, Esc clear.";

struct CompareCell {
    name: web::HtmlElement,
    description: web::HtmlElement,
    meta: web::HtmlElement,
}

pub struct SceneDom {
    orbs: Vec<(String, web::HtmlElement)>,
    lines: Vec<(usize, usize, web::Element)>,
    live_region: web::HtmlElement,
    hint: web::HtmlElement,
    detail: web::HtmlElement,
    detail_name: web::HtmlElement,
    detail_description: web::HtmlElement,
    detail_meta: web::HtmlElement,
    close_button: web::HtmlElement,
    compare_button: web::HtmlElement,
    compare_grid: web::HtmlElement,
    compare_cells: [CompareCell; 2],
    last_selection: RefCell<Option<Selection>>,
}

impl SceneDom {
    /// Create the line overlay, orb buttons, live region and the panel
    /// below the container, all in record order (which is also render
    /// order; depth never reorders anything).
    pub fn build(
        document: &web::Document,
        container: &web::HtmlElement,
        galaxy: &Galaxy,
    ) -> anyhow::Result<Self> {
        let count = galaxy.store().len();

        // Lines sit behind the orbs (which carry z-index) and never take
        // pointer events.
        let svg = document
            .create_element_ns(Some(SVG_NS), "svg")
            .map_err(|e| anyhow!("create line overlay: {e:?}"))?;
        let _ = svg.set_attribute("style", LINES_STYLE);
        let _ = svg.set_attribute("aria-hidden", "true");
        let mut lines = Vec::new();
        for (i, j) in link_pairs(count) {
            let line = document
                .create_element_ns(Some(SVG_NS), "line")
                .map_err(|e| anyhow!("create line: {e:?}"))?;
            let _ = line.set_attribute("stroke", "#0ea5a066");
            let _ = line.set_attribute("stroke-width", "1");
            let _ = line.set_attribute("stroke-linecap", "round");
            let _ = svg.append_child(&line);
            lines.push((i, j, line));
        }
        container
            .append_child(&svg)
            .map_err(|e| anyhow!("append line overlay: {e:?}"))?;

        let mut orbs = Vec::with_capacity(count);
        for record in galaxy.store().records() {
            let el = dom::create_html(document, "button")?;
            el.set_id(&format!("orb-{}", record.id));
            let years = record
                .years
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string());
            let percent = record
                .percent
                .map(|p| format!("{p:.0}"))
                .unwrap_or_else(|| "-".to_string());
            let _ = el.set_attribute(
                "aria-label",
                &format!(
                    "{}. {} years. Proficiency {} percent.",
                    record.name, years, percent
                ),
            );
            let _ = el.set_attribute("aria-pressed", "false");
            let color = record.color.as_deref().unwrap_or("#fff");
            let _ = el.set_attribute(
                "style",
                &format!(
                    "{ORB_STATIC_STYLE}background:radial-gradient(circle at 30% 30%, {color} 0%, \
                     {color}66 25%, rgba(5,8,12,0.6) 60%);"
                ),
            );
            el.set_text_content(Some(&record.name));
            container
                .append_child(&el)
                .map_err(|e| anyhow!("append orb: {e:?}"))?;
            orbs.push((record.id.clone(), el));
        }

        let live_region = dom::create_html(document, "div")?;
        let _ = live_region.set_attribute("role", "status");
        let _ = live_region.set_attribute("aria-live", "polite");
        let _ = live_region.set_attribute("style", LIVE_REGION_STYLE);
        container
            .append_child(&live_region)
            .map_err(|e| anyhow!("append live region: {e:?}"))?;

        // Details / compare panel lives below the galaxy viewport.
        let panel = dom::create_html(document, "div")?;
        let _ = panel.set_attribute("style", PANEL_STYLE);

        let hint = dom::create_html(document, "div")?;
        hint.set_text_content(Some(HINT_TEXT));
        let _ = panel.append_child(&hint);

        let detail = dom::create_html(document, "div")?;
        dom::set_style(&detail, "display", "none");
        let detail_name = dom::create_html(document, "div")?;
        dom::set_style(&detail_name, "font-weight", "600");
        let detail_description = dom::create_html(document, "div")?;
        dom::set_style(&detail_description, "opacity", "0.8");
        let detail_meta = dom::create_html(document, "div")?;
        dom::set_style(&detail_meta, "opacity", "0.6");
        dom::set_style(&detail_meta, "margin-top", "4px");
        let close_button = dom::create_html(document, "button")?;
        close_button.set_text_content(Some("Close"));
        let _ = close_button.set_attribute("style", PANEL_BUTTON_STYLE);
        let compare_button = dom::create_html(document, "button")?;
        compare_button.set_text_content(Some("Toggle Compare"));
        let _ = compare_button.set_attribute("style", PANEL_BUTTON_STYLE);
        let buttons = dom::create_html(document, "div")?;
        dom::set_style(&buttons, "margin-top", "8px");
        let _ = buttons.append_child(&close_button);
        let _ = buttons.append_child(&compare_button);
        let _ = detail.append_child(&detail_name);
        let _ = detail.append_child(&detail_description);
        let _ = detail.append_child(&detail_meta);
        let _ = detail.append_child(&buttons);
        let _ = panel.append_child(&detail);

        let compare_grid = dom::create_html(document, "div")?;
        dom::set_style(&compare_grid, "display", "none");
        let mut cells = Vec::with_capacity(2);
        for _ in 0..2 {
            let root = dom::create_html(document, "div")?;
            let _ = root.set_attribute("style", COMPARE_CELL_STYLE);
            let name = dom::create_html(document, "div")?;
            dom::set_style(&name, "font-weight", "500");
            let description = dom::create_html(document, "div")?;
            dom::set_style(&description, "opacity", "0.8");
            let meta = dom::create_html(document, "div")?;
            dom::set_style(&meta, "margin-top", "4px");
            let _ = root.append_child(&name);
            let _ = root.append_child(&description);
            let _ = root.append_child(&meta);
            let _ = compare_grid.append_child(&root);
            cells.push(CompareCell {
                name,
                description,
                meta,
            });
        }
        let _ = panel.append_child(&compare_grid);

        let compare_cells = match <[CompareCell; 2]>::try_from(cells) {
            Ok(cells) => cells,
            Err(_) => return Err(anyhow!("compare grid cells missing")),
        };

        container
            .insert_adjacent_element("afterend", &panel)
            .map_err(|e| anyhow!("append panel: {e:?}"))?;

        Ok(Self {
            orbs,
            lines,
            live_region,
            hint,
            detail,
            detail_name,
            detail_description,
            detail_meta,
            close_button,
            compare_button,
            compare_grid,
            compare_cells,
            last_selection: RefCell::new(None),
        })
    }

    pub fn orbs(&self) -> &[(String, web::HtmlElement)] {
        &self.orbs
    }

    pub fn close_button(&self) -> &web::HtmlElement {
        &self.close_button
    }

    pub fn compare_button(&self) -> &web::HtmlElement {
        &self.compare_button
    }

    /// Push the current projection, selection flags and announcement into
    /// the DOM. Called after every state mutation and once per frame.
    pub fn refresh(&self, galaxy: &Galaxy) {
        let items = galaxy.items();

        for (item, (id, el)) in items.iter().zip(&self.orbs) {
            debug_assert_eq!(&item.id, id);
            dom::set_style(
                el,
                "transform",
                &format!(
                    "translate(-50%,-50%) translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
                    item.screen_x, item.screen_y, item.visual_scale
                ),
            );
            dom::set_style(el, "width", &format!("{:.1}px", item.diameter));
            dom::set_style(el, "height", &format!("{:.1}px", item.diameter));
            dom::set_style(
                el,
                "border",
                if item.is_comparing {
                    BORDER_COMPARING
                } else {
                    BORDER_PLAIN
                },
            );
            dom::set_style(
                el,
                "box-shadow",
                if item.is_selected {
                    SHADOW_SELECTED
                } else {
                    SHADOW_PLAIN
                },
            );
            dom::set_style(
                el,
                "font-size",
                &format!("{}px", ((item.diameter / 4.0).round()).max(10.0)),
            );
            let _ = el.set_attribute("aria-pressed", if item.is_selected { "true" } else { "false" });
        }

        // Connecting lines follow the projected endpoints; opacity fades
        // with the depth gap.
        let positions = galaxy.positions();
        for (i, j, line) in &self.lines {
            let (Some(a), Some(b)) = (items.get(*i), items.get(*j)) else {
                continue;
            };
            let _ = line.set_attribute("x1", &format!("{:.2}", a.screen_x));
            let _ = line.set_attribute("y1", &format!("{:.2}", a.screen_y));
            let _ = line.set_attribute("x2", &format!("{:.2}", b.screen_x));
            let _ = line.set_attribute("y2", &format!("{:.2}", b.screen_y));
            let _ = line.set_attribute(
                "opacity",
                &format!("{:.3}", link_opacity(positions[*i].depth, positions[*j].depth)),
            );
        }

        // Panel and live region only depend on selection; update them on
        // transitions so the polite region is not re-announced every frame.
        let state = galaxy.selection_state();
        let mut last = self.last_selection.borrow_mut();
        if last.as_ref() != Some(&state) {
            self.update_panel(&state, galaxy);
            self.live_region
                .set_text_content(Some(&galaxy.announcement()));
            *last = Some(state);
        }
    }

    fn update_panel(&self, state: &Selection, galaxy: &Galaxy) {
        match state {
            Selection::Idle => {
                dom::set_style(&self.hint, "display", "block");
                dom::set_style(&self.detail, "display", "none");
                dom::set_style(&self.compare_grid, "display", "none");
            }
            Selection::Selected(id) => {
                let record = galaxy.store().get(id);
                self.detail_name
                    .set_text_content(Some(galaxy.store().name_of(id)));
                self.detail_description.set_text_content(
                    record.and_then(|r| r.description.as_deref()),
                );
                self.detail_meta.set_text_content(
                    record
                        .and_then(|r| r.percent)
                        .map(|p| format!("Proficiency: {p:.0}%"))
                        .as_deref(),
                );
                dom::set_style(&self.hint, "display", "none");
                dom::set_style(&self.detail, "display", "block");
                dom::set_style(&self.compare_grid, "display", "none");
            }
            Selection::Comparing(a, b) => {
                for (id, cell) in [a, b].into_iter().zip(&self.compare_cells) {
                    let record = galaxy.store().get(id);
                    cell.name.set_text_content(Some(galaxy.store().name_of(id)));
                    cell.description
                        .set_text_content(record.and_then(|r| r.description.as_deref()));
                    let percent = record
                        .and_then(|r| r.percent)
                        .map(|p| format!("{p:.0}"))
                        .unwrap_or_else(|| "-".to_string());
                    let years = record
                        .and_then(|r| r.years)
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    cell.meta
                        .set_text_content(Some(&format!("Proficiency: {percent}% \u{2022} {years}y")));
                }
                dom::set_style(&self.hint, "display", "none");
                dom::set_style(&self.detail, "display", "none");
                let _ = self
                    .compare_grid
                    .set_attribute("style", COMPARE_GRID_STYLE);
            }
        }
    }
}
