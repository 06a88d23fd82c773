// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::frequency::PAGE,
    &pages::pairs::PAGE,
    &pages::stacks::PAGE,
    &pages::density::PAGE,
    &pages::categories::PAGE,
    &pages::apps::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
