// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Block, Interest, Match, Message, MessageKind, Profile, ProfileType, Report, Swipe, SwipeAction,
};
pub use requests::{
    BlockRequest, CreateProfileRequest, ReportRequest, SendMessageRequest, SwipeRequest,
    UpdateProfileRequest,
};
pub use responses::{
    DiscoveryResponse, ErrorResponse, HealthResponse, MatchWithProfiles, SwipeResponse,
};
