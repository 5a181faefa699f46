pub mod discord;

pub use discord::DiscordStatusChannel;
