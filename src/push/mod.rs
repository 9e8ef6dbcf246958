pub mod providers;
pub mod scheduler;

pub use providers::{
    HttpRegistrationEndpoint, PermissionProvider, PermissionStatus, RegistrationEndpoint,
    RegistrationReply, SettingsPermission, StaticToken, TokenProvider,
};
pub use scheduler::{
    cancel_pair, spawn, PushRegistrar, RegistrationOutcome, RetryPolicy, SchedulerHandle,
};
