//! Repository layer for schools & pages.
//!
//! Repositories sit on top of the storage adapter and never see which backend is active.
//! They convert domain models into documents on the way in and stored documents back into
//! domain models on the way out, so storage documents never leak into the service layer.

pub mod page;
pub mod school;

#[cfg(test)]
mod test;
