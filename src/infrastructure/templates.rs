//! HTML templates
//!
//! Templates are embedded at compile time and rendered with minijinja.
//! Names ending in `.html` get HTML auto-escaping.

use minijinja::{context, Environment};

use crate::application::dto::MENU_FORM_FIELDS;

const MENU_ITEMS_TEMPLATE: &str = "menu_items.html";

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(
            MENU_ITEMS_TEMPLATE,
            include_str!("../../templates/menu_items.html"),
        )?;
        Ok(Self { env })
    }

    /// Render the page holding an empty menu form
    pub fn render_menu_form(&self) -> Result<String, minijinja::Error> {
        self.env
            .get_template(MENU_ITEMS_TEMPLATE)?
            .render(context! { fields => MENU_FORM_FIELDS })
    }
}
