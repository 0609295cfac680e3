use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::filter::FilterRepository,
    model::filter::{FilterKind, FilterMode},
};

mod get_selected;
mod replace;
