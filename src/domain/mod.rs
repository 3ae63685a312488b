//! Domain Layer
//!
//! Pure emoji asset logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Dataset records, name maps, glyph table, generated artifacts
//! - `value_objects/` - Immutable value types (Codepoint, CacheStamp, SpritePosition)
//! - `services/` - Catalog, alias resolution, CSS and lookup-table rendering
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
