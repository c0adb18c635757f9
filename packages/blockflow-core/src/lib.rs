pub mod assets;
pub mod block;
pub mod data;
pub mod error;
pub mod geom;
pub mod layout;
pub mod lines;
pub mod rng;
pub mod viewport;

pub use assets::{AssetBundle, AssetEntry, AssetHandle, AssetTicket};
pub use block::{Block, Color, Dot};
pub use data::{BlockRecord, DotRecord, VizData};
pub use error::{AssetError, ConfigError, LayoutError};
pub use layout::{LayoutEngine, LayoutReport};
pub use lines::{Curve, DotGroup, LineStyle};
pub use rng::{RandomSource, SeededRandom};
pub use viewport::{Size, Viewport};
