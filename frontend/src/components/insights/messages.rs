use common::model::insight::{InsightEntry, InsightFilter, LikeToggle};
use common::store::StoreError;

#[derive(Clone, Copy)]
pub enum Field {
    Title,
    Url,
    Category,
    Description,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<InsightEntry>, StoreError>),
    SetFilter(InsightFilter),
    OpenForm,
    CloseForm,
    Edit(Field, String),
    Submit,
    Submitted(Result<(), StoreError>),
    Like(String),
    LikeSaved(LikeToggle, Result<(), StoreError>),
    Delete(String),
    Deleted(String, Result<(), StoreError>),
}
