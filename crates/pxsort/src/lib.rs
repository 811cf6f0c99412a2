#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pxsort_image as image;

#[doc(inline)]
pub use pxsort_imgproc as imgproc;

#[doc(inline)]
pub use pxsort_io as io;
