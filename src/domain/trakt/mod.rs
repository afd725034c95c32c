pub mod collection;
pub mod dto;
pub mod error;
pub mod model;

pub use collection::{
    Audio, AudioChannels, CollectionMovie, CollectionPayload, Hdr, MediaType, MovieIds, Resolution,
};
pub use dto::{AuthTokenPair, RefreshResult, TraktUser, TraktUserIds, UserSettingsResponse};
pub use error::TraktError;
pub use model::{TestOutcome, TraktSettings, ValidationFailure};
