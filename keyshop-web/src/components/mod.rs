pub mod cart_item;
pub mod game_selector;
pub mod header;
pub mod key_card;
pub mod mini_cart;
