pub mod add_buyer_request;
pub mod create_lot_request;
pub mod lot_dto;
pub mod lot_list_response;
pub mod lot_response;
#[allow(clippy::module_inception)]
pub mod lots;
pub mod update_lot_request;
