pub mod players_online;
