use crate::constants::*;
use crate::input;
use glam::Vec2;
use globe_core::Tooltip;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The hover tooltip: a positioned box with a label and a value line.
pub struct TooltipOverlay {
    root: web::HtmlElement,
    label: Option<web::Element>,
    value: Option<web::Element>,
    shown: Tooltip,
}

impl TooltipOverlay {
    pub fn find(document: &web::Document) -> Option<Self> {
        let root = document
            .get_element_by_id(TOOLTIP_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let mut overlay = Self {
            root,
            label: document.get_element_by_id(TOOLTIP_LABEL_ID),
            value: document.get_element_by_id(TOOLTIP_VALUE_ID),
            shown: Tooltip::Shown {
                label: String::new(),
                value: String::new(),
            },
        };
        overlay.apply(&Tooltip::Hidden);
        Some(overlay)
    }

    pub fn element(&self) -> web::HtmlElement {
        self.root.clone()
    }

    /// Reflect the frame's tooltip state; unchanged states touch nothing.
    pub fn apply(&mut self, tooltip: &Tooltip) {
        if *tooltip == self.shown {
            return;
        }
        match tooltip {
            Tooltip::Hidden => {
                _ = self.root.style().set_property("display", "none");
            }
            Tooltip::Shown { label, value } => {
                if let Some(el) = &self.label {
                    el.set_text_content(Some(label));
                }
                if let Some(el) = &self.value {
                    el.set_text_content(Some(value));
                }
                _ = self.root.style().set_property("display", "block");
            }
        }
        self.shown = tooltip.clone();
    }
}

/// Move the tooltip next to the cursor.
pub fn place(el: &web::HtmlElement, client_x: f32, client_y: f32) {
    let (win_w, win_h) = crate::dom::window_size();
    let tip = Vec2::new(el.offset_width() as f32, el.offset_height() as f32);
    let pos = input::tooltip_position(client_x, client_y, tip, Vec2::new(win_w, win_h));
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", pos.x));
    _ = style.set_property("top", &format!("{}px", pos.y));
}
