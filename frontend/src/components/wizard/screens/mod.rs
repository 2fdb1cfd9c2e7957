pub mod diary;
pub mod home;
pub mod purchase;
pub mod success;
