pub mod analytics;
pub mod automations;
pub mod dashboard;
pub mod help;
pub mod loading;
pub mod login;
pub mod main_menu;
pub mod notifications;
pub mod settings;
