mod class_list;
mod intersection_handle;

pub(crate) use self::class_list::ClassMarker;
pub(crate) use self::intersection_handle::{IntersectionObserverHandle, ObserverInit};
