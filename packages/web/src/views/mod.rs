mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod layouts;
pub use layouts::{DashboardLayout, NotFound, PublicOnly};

mod dashboard;
pub use dashboard::{Dashboard, Profile};
