#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Creation Recipe
//!
//! > **A Recipe for handing out fully-initialized objects in Rust.**
//!
//! Client code asks for a product and gets back something it can use, without
//! ever naming the concrete type behind it. Four creation strategies and one
//! managed shared instance cover the common cases.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Capabilities, not classes
//!
//! Every product is handed out through the trait describing what it can do:
//! `Box<dyn Button>`, `Box<dyn Shape>`, `Box<dyn CarBuilder>`. Which variant is
//! behind the box is decided once, when the factory, dialog or builder is
//! chosen, usually from a [`KitConfig`](lifecycle::KitConfig).
//!
//! ### Ownership does the bookkeeping
//!
//! A product belongs to whoever received it and is dropped with them. The
//! places where lifetimes still matter are explicit:
//!
//! - a [`Dialog`](product_factory::Dialog) tracks release tickets, so a second
//!   release is an error and not a silent no-op;
//! - the [singleton](singleton) hands out `Arc`s, so a handle held across a
//!   reset is safe to touch but refers to the retired instance.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each strategy defines its own error type (`FactoryError`, `DialogError`,
//! `DirectorError`, ...). [`CreationError`](framework::CreationError) wraps
//! them all with `#[from]`, so `?` works across strategies.
//!
//! ### 2. Concurrency Model
//! Factories, dialogs, the prototype registry and the singleton are
//! `Send + Sync` and can be shared between threads. Builders and the director
//! are `Send` only; every mutating call takes `&mut self`, so the compiler
//! enforces a single driver.
//!
//! ### 3. Observability
//! Creation points emit structured `tracing` events. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Contracts ([`framework`], [`model`])
//! - **Role**: Capability traits ([`Widget`](framework::Widget),
//!   [`Button`](framework::Button), [`Shape`](framework::Shape)), the shared
//!   error types, and the concrete products behind them.
//! - **Testing**: [`MockBuilder`](framework::mock::MockBuilder) checks the calls a
//!   director makes on its builder.
//!
//! ### 2. The Strategies
//! - [`family_factory`]: one factory per family; every member it makes is
//!   compatible with the others.
//! - [`product_factory`]: a creator with a single overridable factory method,
//!   plus create / dispose bookkeeping.
//! - [`car_builder`]: step-wise assembly of a [`Car`](model::Car) driven by a
//!   [`CarDirector`](car_builder::CarDirector).
//! - [`prototype`]: new shapes copied from registered prototypes.
//! - [`singleton`]: one lazily created, resettable shared resource.
//!
//! ### 3. The Setup ([`lifecycle`])
//! - **Role**: Logging setup and the configuration that picks variants.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use creation_recipe::car_builder::CarDirector;
//! use creation_recipe::family_factory::GuiFactory;
//! use creation_recipe::framework::Widget;
//! use creation_recipe::lifecycle::KitConfig;
//!
//! let config = KitConfig::from_toml_str("family = \"mac\"\nvehicle = \"suv\"")?;
//!
//! let button = config.family_factory().create_button();
//! assert_eq!(button.identify(), "Mac Button");
//!
//! let car = CarDirector::with_builder(config.builder()).construct()?;
//! assert_eq!(car.to_string(), "Suv Seat --> Suv Engine --> Suv Computer");
//! # Ok::<(), creation_recipe::framework::CreationError>(())
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod car_builder;
pub mod family_factory;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_factory;
pub mod prototype;
pub mod singleton;
