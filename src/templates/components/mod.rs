pub mod results;
pub mod search_modal;
pub mod stay_card;

pub use results::{empty_results, skeleton_grid, stay_grid};
pub use search_modal::{
    city_field, guest_steppers, guest_trigger, search_bar, search_modal, suggestion_list,
};
pub use stay_card::stay_card;
