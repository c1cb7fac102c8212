// ============================================================================
// CITY STORE - reducer-backed state shared through a Yew context
// ============================================================================

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{City, NewCity};
use crate::services::CityApi;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CitiesState {
    pub cities: Vec<City>,
    pub is_loading: bool,
    pub current_city: Option<City>,
    pub error: String,
}

/// Every state transition of the store, modeled as events rather than
/// setters so all business logic lives in one reducer.
pub enum CitiesAction {
    Loading,
    CitiesLoaded(Vec<City>),
    CityLoaded(City),
    CityCreated(City),
    CityDeleted(u32),
    Rejected(String),
}

impl Reducible for CitiesState {
    type Action = CitiesAction;

    fn reduce(self: Rc<Self>, action: CitiesAction) -> Rc<Self> {
        let next = match action {
            // Loading also clears any stale error from the previous request
            CitiesAction::Loading => Self {
                is_loading: true,
                error: String::new(),
                ..(*self).clone()
            },
            CitiesAction::CitiesLoaded(cities) => Self {
                is_loading: false,
                cities,
                ..(*self).clone()
            },
            CitiesAction::CityLoaded(city) => Self {
                is_loading: false,
                current_city: Some(city),
                ..(*self).clone()
            },
            CitiesAction::CityCreated(city) => {
                let mut cities = self.cities.clone();
                cities.push(city.clone());
                Self {
                    is_loading: false,
                    cities,
                    current_city: Some(city),
                    ..(*self).clone()
                }
            }
            CitiesAction::CityDeleted(id) => Self {
                is_loading: false,
                cities: self
                    .cities
                    .iter()
                    .filter(|city| city.id != id)
                    .cloned()
                    .collect(),
                current_city: None,
                ..(*self).clone()
            },
            CitiesAction::Rejected(message) => Self {
                is_loading: false,
                error: message,
                ..(*self).clone()
            },
        };
        Rc::new(next)
    }
}

impl CitiesState {
    /// The detail route passes its id straight out of the URL, so it arrives
    /// as a string. Skip the request when it coerces to the loaded city.
    pub fn should_fetch(&self, raw_id: &str) -> bool {
        match (raw_id.parse::<u32>(), &self.current_city) {
            (Ok(id), Some(current)) => current.id != id,
            _ => true,
        }
    }
}

/// Handle handed out through the context: read-only view of the state plus
/// the four store operations. All I/O runs on the wasm event loop via
/// `spawn_local`; callers that need to sequence work (the form navigating
/// after create) await the operation directly.
#[derive(Clone, PartialEq)]
pub struct CitiesHandle {
    state: UseReducerHandle<CitiesState>,
}

impl CitiesHandle {
    pub fn state(&self) -> &CitiesState {
        &self.state
    }

    pub async fn load_cities(&self) {
        let api = CityApi::new();
        self.state.dispatch(CitiesAction::Loading);
        match api.list().await {
            Ok(cities) => {
                log::info!("🏙️ Loaded {} cities", cities.len());
                self.state.dispatch(CitiesAction::CitiesLoaded(cities));
            }
            Err(e) => {
                log::error!("❌ Error fetching cities: {}", e);
                self.state.dispatch(CitiesAction::Rejected(
                    "There was an error fetching cities...".to_string(),
                ));
            }
        }
    }

    pub async fn load_city(&self, raw_id: &str) {
        if !self.state.should_fetch(raw_id) {
            log::info!("ℹ️ City {} already loaded, skipping fetch", raw_id);
            return;
        }

        let api = CityApi::new();
        self.state.dispatch(CitiesAction::Loading);
        match api.get(raw_id).await {
            Ok(city) => {
                log::info!("🏙️ Loaded city: {}", city.city_name);
                self.state.dispatch(CitiesAction::CityLoaded(city));
            }
            Err(e) => {
                log::error!("❌ Error fetching city {}: {}", raw_id, e);
                self.state.dispatch(CitiesAction::Rejected(
                    "There was an error fetching city...".to_string(),
                ));
            }
        }
    }

    pub async fn create_city(&self, draft: NewCity) {
        let api = CityApi::new();
        self.state.dispatch(CitiesAction::Loading);
        match api.create(&draft).await {
            Ok(city) => {
                log::info!("✅ City created: {} (id {})", city.city_name, city.id);
                self.state.dispatch(CitiesAction::CityCreated(city));
            }
            Err(e) => {
                log::error!("❌ Error creating city: {}", e);
                self.state.dispatch(CitiesAction::Rejected(
                    "There was an error creating new city...".to_string(),
                ));
            }
        }
    }

    pub async fn delete_city(&self, id: u32) {
        let api = CityApi::new();
        self.state.dispatch(CitiesAction::Loading);
        match api.delete(id).await {
            Ok(()) => {
                log::info!("✅ City deleted: {}", id);
                self.state.dispatch(CitiesAction::CityDeleted(id));
            }
            Err(e) => {
                log::error!("❌ Error deleting city {}: {}", id, e);
                self.state.dispatch(CitiesAction::Rejected(
                    "There was an error deleting city...".to_string(),
                ));
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CitiesProviderProps {
    pub children: Children,
}

/// Provider component wrapping the app; fetches the collection once on mount.
#[function_component(CitiesProvider)]
pub fn cities_provider(props: &CitiesProviderProps) -> Html {
    let state = use_reducer(CitiesState::default);
    let handle = CitiesHandle { state };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                handle.load_cities().await;
            });
            || ()
        });
    }

    html! {
        <ContextProvider<CitiesHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<CitiesHandle>>
    }
}

#[hook]
pub fn use_cities() -> CitiesHandle {
    use_context::<CitiesHandle>().expect("use_cities must be used inside CitiesProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use chrono::TimeZone;

    fn sample_city(id: u32, name: &str) -> City {
        City {
            id,
            city_name: name.to_string(),
            country: "Portugal".to_string(),
            emoji: "🇵🇹".to_string(),
            date: chrono::Utc.with_ymd_and_hms(2027, 10, 31, 15, 59, 59).unwrap(),
            notes: String::new(),
            position: Position {
                lat: 38.72,
                lng: -9.14,
            },
        }
    }

    fn reduce(state: CitiesState, action: CitiesAction) -> CitiesState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn loading_sets_flag_and_clears_previous_error() {
        let state = CitiesState {
            error: "There was an error fetching cities...".to_string(),
            ..Default::default()
        };
        let next = reduce(state, CitiesAction::Loading);
        assert!(next.is_loading);
        assert!(next.error.is_empty());
    }

    #[test]
    fn created_city_is_appended_and_becomes_current() {
        let state = CitiesState {
            cities: vec![sample_city(1, "Lisbon")],
            is_loading: true,
            ..Default::default()
        };
        let created = sample_city(2, "Porto");

        let next = reduce(state, CitiesAction::CityCreated(created.clone()));

        assert_eq!(next.cities.len(), 2);
        assert_eq!(next.cities.last(), Some(&created));
        assert_eq!(next.current_city, Some(created));
        assert!(!next.is_loading);
    }

    #[test]
    fn deleted_city_is_removed_and_current_cleared() {
        let lisbon = sample_city(1, "Lisbon");
        let porto = sample_city(2, "Porto");
        let state = CitiesState {
            cities: vec![lisbon.clone(), porto.clone()],
            current_city: Some(porto),
            is_loading: true,
            ..Default::default()
        };

        let next = reduce(state, CitiesAction::CityDeleted(2));

        assert!(next.cities.iter().all(|c| c.id != 2));
        assert_eq!(next.cities, vec![lisbon]);
        assert_eq!(next.current_city, None);
    }

    #[test]
    fn rejected_records_message_and_stops_loading() {
        let state = CitiesState {
            is_loading: true,
            ..Default::default()
        };
        let next = reduce(
            state,
            CitiesAction::Rejected("There was an error fetching city...".to_string()),
        );
        assert!(!next.is_loading);
        assert_eq!(next.error, "There was an error fetching city...");
    }

    #[test]
    fn loaded_collection_replaces_cities() {
        let state = CitiesState {
            cities: vec![sample_city(1, "Lisbon")],
            is_loading: true,
            ..Default::default()
        };
        let next = reduce(
            state,
            CitiesAction::CitiesLoaded(vec![sample_city(2, "Porto"), sample_city(3, "Berlin")]),
        );
        assert_eq!(next.cities.len(), 2);
        assert!(!next.is_loading);
    }

    #[test]
    fn should_fetch_short_circuits_on_matching_id() {
        let state = CitiesState {
            current_city: Some(sample_city(7, "Lisbon")),
            ..Default::default()
        };
        // URL ids are strings; "7" coerces to the loaded city
        assert!(!state.should_fetch("7"));
        assert!(state.should_fetch("8"));
        // Non-numeric ids always go to the backend, which rejects them
        assert!(state.should_fetch("not-a-number"));
    }

    #[test]
    fn should_fetch_when_nothing_is_loaded() {
        let state = CitiesState::default();
        assert!(state.should_fetch("7"));
    }
}
