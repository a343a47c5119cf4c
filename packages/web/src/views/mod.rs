mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod protected_route;
pub use protected_route::ProtectedRoute;

mod profile;
pub use profile::Profile;

mod games;
pub use games::Games;
