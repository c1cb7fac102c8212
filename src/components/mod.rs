pub mod app_layout;
pub mod city_detail;
pub mod city_form;
pub mod city_item;
pub mod city_list;
pub mod feedback;
pub mod login;
pub mod map;
pub mod protected_route;
pub mod sidebar;
pub mod user_badge;

pub use app_layout::AppLayout;
pub use city_detail::CityDetail;
pub use city_form::CityForm;
pub use city_item::CityItem;
pub use city_list::CityList;
pub use feedback::{BackButton, Message, Spinner};
pub use login::Login;
pub use map::MapView;
pub use protected_route::ProtectedRoute;
pub use sidebar::Sidebar;
pub use user_badge::UserBadge;
