// Domain models: raw telemetry input, classified events, series and geometry output

mod classification;
mod diagnostic;
mod event;
mod participant;
mod series;
mod snapshot;
mod time;
mod timeline;

pub(crate) use time::de_millis;

pub use classification::{Category, Classification, ClassifiedEvent, ColorKey, ShapeKey};
pub use diagnostic::{Diagnostic, SeriesKey};
pub use event::{CallEvent, EventKind, EventMetadata, NetworkIssue};
pub use participant::{IntervalKind, MediaEvent, MediaEventKind, ParticipantTrack};
pub use series::{
    ConnectionSeries, IngestedStats, NamedSeries, ReportSeries, ReportSeriesSet, SeriesPoint,
    Visibility,
};
pub use snapshot::{FieldValue, ReportFields, StatSnapshot};
pub use time::TimeBounds;
pub use timeline::{IntervalSpan, Marker, SessionBar, TimelineGeometry, TrackRow};
