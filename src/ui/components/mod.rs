pub mod song_card;
pub mod spinner;
