use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::assistant_page::AssistantPage;
use crate::pages::dashboard_page::DashboardPage;
use crate::pages::kap_page::KapPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    DashboardPage {},


    #[route("/kap")]
    KapPage {},


    #[route("/assistant")]
    AssistantPage {},

}
