mod catalogue;
mod follow;
mod notification;
mod preference;
mod review;
mod user;
