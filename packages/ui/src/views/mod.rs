mod profile;
pub use profile::ProfileView;
