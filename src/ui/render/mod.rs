mod all;
mod confirm;
mod filters;
mod footer;
mod form;
mod header;
mod log;
mod table;

use self::log::log;
use super::*;
use filters::filters;
use footer::footer;
use form::form;
use header::header;
use table::table;

pub use all::all as render;
