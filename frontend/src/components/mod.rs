use shared::ApiConfig;
use yew::prelude::*;

pub mod enroll_page;
pub mod header;
pub mod results;
pub mod search_page;
pub mod utils;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub config: ApiConfig,
}
