//! In-memory favorites list: id-unique, insertion-ordered, volatile.

use futures::future::join_all;

use crate::model::{FavoriteCity, WeatherSnapshot};
use crate::provider::WeatherProvider;
use crate::units::UnitSystem;

/// Owned collection of favorite cities. Lives for the process only; there is
/// no persistence boundary by design.
#[derive(Debug, Default)]
pub struct FavoriteList {
    cities: Vec<FavoriteCity>,
}

impl FavoriteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a favorite unless one with the same id already exists.
    /// Returns whether the city was inserted.
    pub fn add(&mut self, city: FavoriteCity) -> bool {
        if self.cities.iter().any(|c| c.id == city.id) {
            return false;
        }
        self.cities.push(city);
        true
    }

    /// Convenience for adding straight from a fetched snapshot.
    pub fn add_snapshot(&mut self, snapshot: WeatherSnapshot) -> bool {
        self.add(FavoriteCity::from_snapshot(snapshot))
    }

    /// Remove a favorite by id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<FavoriteCity> {
        let index = self.cities.iter().position(|c| c.id == id)?;
        Some(self.cities.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteCity> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteCity> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Refresh every favorite's snapshot with one concurrent fetch each.
    ///
    /// Results are applied independently per city: a successful fetch
    /// replaces that city's snapshot, a failed one keeps the previous
    /// reading. In-flight results apply last-write-wins.
    pub async fn refresh_all(&mut self, provider: &dyn WeatherProvider, units: UnitSystem) {
        let fetches = self
            .cities
            .iter()
            .map(|city| provider.fetch_current(&city.display_name, units));
        let results = join_all(fetches).await;

        for (city, result) in self.cities.iter_mut().zip(results) {
            match result {
                Ok(snapshot) => {
                    city.id = snapshot.city_id.to_string();
                    city.display_name = snapshot.location_name.clone();
                    city.last_known = Some(snapshot);
                }
                Err(err) => {
                    tracing::warn!(
                        city = %city.display_name,
                        error = %err,
                        "favorite refresh failed, keeping previous reading"
                    );
                }
            }
        }
    }
}
