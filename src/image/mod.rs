pub mod color;
pub mod io;
pub mod plane;

pub use self::color::{ChannelOrder, ColorImage};
pub use self::io::DecodedImage;
pub use self::plane::PlaneU8;
