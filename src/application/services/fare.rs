//! Fare service: the fare catalog plus flight/subfleet fare associations

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    DomainError, DomainResult, Fare, FareAssignment, FareOverrides, FareOwner, Flight,
    RepositoryProvider, ResolvedFare, Subfleet,
};

/// Service for fare operations
pub struct FareService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FareService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Catalog ────────────────────────────────────────────────

    pub async fn create_fare(&self, fare: Fare) -> DomainResult<Fare> {
        validate_fare(&fare)?;
        let saved = self.repos.fares().save(fare).await?;
        info!(fare_id = saved.id, code = %saved.code, "Fare created");
        Ok(saved)
    }

    pub async fn get_fare(&self, id: i32) -> DomainResult<Fare> {
        self.require_fare(id).await
    }

    pub async fn list_fares(&self) -> DomainResult<Vec<Fare>> {
        self.repos.fares().find_all().await
    }

    /// Rejects the change when an existing flight or subfleet override
    /// would no longer resolve against the new values.
    pub async fn update_fare(&self, fare: Fare) -> DomainResult<Fare> {
        validate_fare(&fare)?;
        self.require_fare(fare.id).await?;
        for link in self.repos.fare_assignments().find_for_fare(fare.id).await? {
            if let Err(e) = fare.resolve(&link.overrides) {
                return Err(DomainError::Validation(format!(
                    "fare {} would break the override on {}: {}",
                    fare.code, link.owner, e
                )));
            }
        }
        let id = fare.id;
        self.repos.fares().update(fare).await?;
        info!(fare_id = id, "Fare updated");
        self.require_fare(id).await
    }

    /// Removes the fare along with every flight and subfleet link to it.
    pub async fn delete_fare(&self, id: i32) -> DomainResult<()> {
        self.repos.fares().delete(id).await?;
        info!(fare_id = id, "Fare deleted");
        Ok(())
    }

    // ── Flights ────────────────────────────────────────────────

    /// Attach `fare_id` to the flight, or replace the overrides of an
    /// existing attachment.
    pub async fn set_for_flight(
        &self,
        flight_id: &str,
        fare_id: i32,
        overrides: FareOverrides,
    ) -> DomainResult<()> {
        let flight = self.require_flight(flight_id).await?;
        self.set_for_owner(FareOwner::Flight(flight.id), fare_id, overrides)
            .await
    }

    pub async fn get_for_flight(&self, flight_id: &str) -> DomainResult<Vec<ResolvedFare>> {
        let flight = self.require_flight(flight_id).await?;
        self.get_for_owner(&FareOwner::Flight(flight.id)).await
    }

    /// Missing associations are ignored.
    pub async fn del_fare_from_flight(&self, flight_id: &str, fare_id: i32) -> DomainResult<()> {
        let flight = self.require_flight(flight_id).await?;
        self.del_for_owner(FareOwner::Flight(flight.id), fare_id)
            .await
    }

    /// Fares a flight actually sells: its subfleet's fares, with the
    /// flight's own association taking the place of the subfleet's for
    /// the same fare. Each is still resolved against the fare defaults.
    pub async fn get_all_fares(&self, flight_id: &str) -> DomainResult<Vec<ResolvedFare>> {
        let flight = self.require_flight(flight_id).await?;

        let mut by_fare: BTreeMap<i32, FareAssignment> = BTreeMap::new();
        if let Some(subfleet_id) = flight.subfleet_id {
            let subfleet = self.require_subfleet(subfleet_id).await?;
            for link in self
                .repos
                .fare_assignments()
                .find_for_owner(&FareOwner::Subfleet(subfleet.id))
                .await?
            {
                by_fare.insert(link.fare_id, link);
            }
        }
        for link in self
            .repos
            .fare_assignments()
            .find_for_owner(&FareOwner::Flight(flight.id.clone()))
            .await?
        {
            by_fare.insert(link.fare_id, link);
        }

        let fares = self.resolve_all(by_fare.into_values()).await?;
        debug!(flight = %flight.ident(), count = fares.len(), "Effective fares resolved");
        Ok(fares)
    }

    // ── Subfleets ──────────────────────────────────────────────

    pub async fn set_for_subfleet(
        &self,
        subfleet_id: i32,
        fare_id: i32,
        overrides: FareOverrides,
    ) -> DomainResult<()> {
        let subfleet = self.require_subfleet(subfleet_id).await?;
        self.set_for_owner(FareOwner::Subfleet(subfleet.id), fare_id, overrides)
            .await
    }

    pub async fn get_for_subfleet(&self, subfleet_id: i32) -> DomainResult<Vec<ResolvedFare>> {
        let subfleet = self.require_subfleet(subfleet_id).await?;
        self.get_for_owner(&FareOwner::Subfleet(subfleet.id)).await
    }

    /// Missing associations are ignored.
    pub async fn del_fare_from_subfleet(&self, subfleet_id: i32, fare_id: i32) -> DomainResult<()> {
        let subfleet = self.require_subfleet(subfleet_id).await?;
        self.del_for_owner(FareOwner::Subfleet(subfleet.id), fare_id)
            .await
    }

    // ── Shared by both owner kinds ─────────────────────────────

    async fn set_for_owner(
        &self,
        owner: FareOwner,
        fare_id: i32,
        overrides: FareOverrides,
    ) -> DomainResult<()> {
        overrides.validate()?;
        let fare = self.require_fare(fare_id).await?;
        // Fail now rather than on the next read
        fare.resolve(&overrides)?;

        self.repos
            .fare_assignments()
            .upsert(&owner, fare.id, overrides)
            .await?;
        info!(%owner, fare = %fare.code, "Fare assigned");
        Ok(())
    }

    async fn get_for_owner(&self, owner: &FareOwner) -> DomainResult<Vec<ResolvedFare>> {
        let links = self.repos.fare_assignments().find_for_owner(owner).await?;
        self.resolve_all(links).await
    }

    async fn del_for_owner(&self, owner: FareOwner, fare_id: i32) -> DomainResult<()> {
        let removed = self
            .repos
            .fare_assignments()
            .delete(&owner, fare_id)
            .await?;
        if removed {
            info!(%owner, fare_id, "Fare unassigned");
        } else {
            debug!(%owner, fare_id, "No fare assignment to remove");
        }
        Ok(())
    }

    /// Resolve links against their fares, ordered by fare code.
    async fn resolve_all(
        &self,
        links: impl IntoIterator<Item = FareAssignment>,
    ) -> DomainResult<Vec<ResolvedFare>> {
        let mut resolved = Vec::new();
        for link in links {
            let fare = self.require_fare(link.fare_id).await?;
            resolved.push(fare.resolve(&link.overrides)?);
        }
        resolved.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(resolved)
    }

    async fn require_fare(&self, id: i32) -> DomainResult<Fare> {
        self.repos
            .fares()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Fare", "id", id))
    }

    async fn require_flight(&self, id: &str) -> DomainResult<Flight> {
        self.repos
            .flights()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Flight", "id", id))
    }

    async fn require_subfleet(&self, id: i32) -> DomainResult<Subfleet> {
        self.repos
            .subfleets()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Subfleet", "id", id))
    }
}

fn validate_fare(fare: &Fare) -> DomainResult<()> {
    if fare.code.trim().is_empty() {
        return Err(DomainError::Validation("fare code is required".to_string()));
    }
    if fare.price.is_sign_negative() && !fare.price.is_zero() {
        return Err(DomainError::Validation("price must not be negative".to_string()));
    }
    if fare.cost.is_sign_negative() && !fare.cost.is_zero() {
        return Err(DomainError::Validation("cost must not be negative".to_string()));
    }
    if fare.capacity < 0 {
        return Err(DomainError::Validation("capacity must not be negative".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::domain::OverrideValue;
    use crate::infrastructure::InMemoryRepositoryProvider;
    use crate::support::math::add_percent;

    struct Fixture {
        repos: Arc<InMemoryRepositoryProvider>,
        svc: FareService,
    }

    fn fixture() -> Fixture {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let svc = FareService::new(repos.clone());
        Fixture { repos, svc }
    }

    fn new_fare(code: &str, price: Decimal, cost: Decimal, capacity: i32) -> Fare {
        let now = Utc::now();
        Fare {
            id: 0,
            code: code.to_string(),
            name: format!("Fare {}", code),
            price,
            cost,
            capacity,
            notes: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    impl Fixture {
        async fn fare(&self) -> Fare {
            self.fare_with_code("Y").await
        }

        async fn fare_with_code(&self, code: &str) -> Fare {
            self.svc
                .create_fare(new_fare(code, dec!(250.75), dec!(80.40), 150))
                .await
                .unwrap()
        }

        async fn subfleet(&self) -> Subfleet {
            let now = Utc::now();
            self.repos
                .subfleets()
                .save(Subfleet {
                    id: 0,
                    type_code: "B777".to_string(),
                    name: "Boeing 777".to_string(),
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap()
        }

        async fn flight(&self, subfleet_id: Option<i32>) -> Flight {
            let now = Utc::now();
            self.repos
                .flights()
                .save(Flight {
                    id: uuid::Uuid::new_v4().to_string(),
                    airline_code: "VMS".to_string(),
                    flight_number: "42".to_string(),
                    dpt_airport: "KAUS".to_string(),
                    arr_airport: "KJFK".to_string(),
                    subfleet_id,
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn flight_fares_no_override() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let fare = fx.fare().await;

        fx.svc
            .set_for_flight(&flight.id, fare.id, FareOverrides::none())
            .await
            .unwrap();
        let fares = fx.svc.get_for_flight(&flight.id).await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].price, fare.price);
        assert_eq!(fares[0].cost, fare.cost);
        assert_eq!(fares[0].capacity, fare.capacity);

        // set an override now
        fx.svc
            .set_for_flight(
                &flight.id,
                fare.id,
                FareOverrides::none().price(50).capacity(400),
            )
            .await
            .unwrap();
        let fares = fx.svc.get_for_flight(&flight.id).await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].price, dec!(50));
        assert_eq!(fares[0].capacity, 400);
        assert_eq!(fares[0].cost, fare.cost);

        fx.svc.del_fare_from_flight(&flight.id, fare.id).await.unwrap();
        assert!(fx.svc.get_for_flight(&flight.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn flight_fare_override_as_percent() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let fare = fx.fare().await;

        let new_price = add_percent(fare.price, "20%").unwrap();
        let new_cost = add_percent(fare.cost, "-20%").unwrap();
        let new_capacity = add_percent(Decimal::from(fare.capacity), "200%").unwrap();

        fx.svc
            .set_for_flight(
                &flight.id,
                fare.id,
                FareOverrides::none()
                    .price("20%".parse::<OverrideValue>().unwrap())
                    .cost("-20%".parse::<OverrideValue>().unwrap())
                    .capacity("200%".parse::<OverrideValue>().unwrap()),
            )
            .await
            .unwrap();

        let fares = fx.svc.get_for_flight(&flight.id).await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].price, new_price);
        assert_eq!(fares[0].cost, new_cost);
        assert_eq!(Decimal::from(fares[0].capacity), new_capacity);
        assert_eq!(fares[0].price, dec!(300.90));
        assert_eq!(fares[0].cost, dec!(64.32));
        assert_eq!(fares[0].capacity, 450);
    }

    #[tokio::test]
    async fn subfleet_fares_no_override() {
        let fx = fixture();
        let subfleet = fx.subfleet().await;
        let fare = fx.fare().await;

        fx.svc
            .set_for_subfleet(subfleet.id, fare.id, FareOverrides::none())
            .await
            .unwrap();
        let fares = fx.svc.get_for_subfleet(subfleet.id).await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].price, fare.price);
        assert_eq!(fares[0].capacity, fare.capacity);

        fx.svc
            .set_for_subfleet(
                subfleet.id,
                fare.id,
                FareOverrides::none().price(50).capacity(400),
            )
            .await
            .unwrap();
        let fares = fx.svc.get_for_subfleet(subfleet.id).await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].price, dec!(50));
        assert_eq!(fares[0].capacity, 400);

        fx.svc
            .del_fare_from_subfleet(subfleet.id, fare.id)
            .await
            .unwrap();
        assert!(fx.svc.get_for_subfleet(subfleet.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn subfleet_fares_override_updates_in_place() {
        let fx = fixture();
        let subfleet = fx.subfleet().await;
        let fare = fx.fare().await;

        fx.svc
            .set_for_subfleet(
                subfleet.id,
                fare.id,
                FareOverrides::none().price(50).capacity(400),
            )
            .await
            .unwrap();
        let fares = fx.svc.get_for_subfleet(subfleet.id).await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].price, dec!(50));
        assert_eq!(fares[0].capacity, 400);

        fx.svc
            .set_for_subfleet(
                subfleet.id,
                fare.id,
                FareOverrides::none().price(150).capacity(50),
            )
            .await
            .unwrap();
        let fares = fx.svc.get_for_subfleet(subfleet.id).await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].price, dec!(150));
        assert_eq!(fares[0].capacity, 50);

        fx.svc
            .del_fare_from_subfleet(subfleet.id, fare.id)
            .await
            .unwrap();
        assert!(fx.svc.get_for_subfleet(subfleet.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn subfleet_fare_override_as_percent() {
        let fx = fixture();
        let subfleet = fx.subfleet().await;
        let fare = fx.fare().await;

        fx.svc
            .set_for_subfleet(
                subfleet.id,
                fare.id,
                FareOverrides::none()
                    .price(OverrideValue::Percent(20))
                    .cost(OverrideValue::Percent(-20))
                    .capacity(OverrideValue::Percent(200)),
            )
            .await
            .unwrap();

        let fares = fx.svc.get_for_subfleet(subfleet.id).await.unwrap();
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].price, add_percent(fare.price, "20%").unwrap());
        assert_eq!(fares[0].cost, add_percent(fare.cost, "-20%").unwrap());
        assert_eq!(fares[0].capacity, 450);
    }

    #[tokio::test]
    async fn mixed_override_kinds_stay_on_their_own_field() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let fare = fx.fare().await;

        fx.svc
            .set_for_flight(
                &flight.id,
                fare.id,
                FareOverrides::none()
                    .price(OverrideValue::Percent(10))
                    .cost(dec!(12.00)),
            )
            .await
            .unwrap();

        let fares = fx.svc.get_for_flight(&flight.id).await.unwrap();
        assert_eq!(fares[0].price, dec!(275.825));
        assert_eq!(fares[0].cost, dec!(12.00));
        assert_eq!(fares[0].capacity, 150);
    }

    #[tokio::test]
    async fn capacity_percent_rounds_half_away_from_zero() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let fare = fx
            .svc
            .create_fare(new_fare("F", dec!(1000), dec!(300), 15))
            .await
            .unwrap();

        fx.svc
            .set_for_flight(
                &flight.id,
                fare.id,
                FareOverrides::none().capacity(OverrideValue::Percent(10)),
            )
            .await
            .unwrap();

        // 15 * 1.1 = 16.5 -> 17
        let fares = fx.svc.get_for_flight(&flight.id).await.unwrap();
        assert_eq!(fares[0].capacity, 17);
    }

    #[tokio::test]
    async fn deleting_missing_association_is_a_no_op() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let subfleet = fx.subfleet().await;
        let fare = fx.fare().await;

        fx.svc.del_fare_from_flight(&flight.id, fare.id).await.unwrap();
        fx.svc
            .del_fare_from_subfleet(subfleet.id, fare.id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unknown_owner_or_fare_is_not_found() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let fare = fx.fare().await;

        let err = fx
            .svc
            .set_for_flight("no-such-flight", fare.id, FareOverrides::none())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Flight", .. }));

        let err = fx
            .svc
            .set_for_subfleet(404, fare.id, FareOverrides::none())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Subfleet", .. }));

        let err = fx
            .svc
            .set_for_flight(&flight.id, 9999, FareOverrides::none())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Fare", .. }));

        assert!(matches!(
            fx.svc.get_for_subfleet(404).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            fx.svc.del_fare_from_flight("nope", fare.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_overrides_are_rejected_and_not_stored() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let fare = fx.fare().await;

        let err = fx
            .svc
            .set_for_flight(
                &flight.id,
                fare.id,
                FareOverrides::none().capacity(dec!(12.5)),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidOverride { .. }));

        let err = fx
            .svc
            .set_for_flight(
                &flight.id,
                fare.id,
                FareOverrides::none().price(OverrideValue::Percent(-150)),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidOverride { .. }));

        assert!(fx.svc.get_for_flight(&flight.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn overflowing_percent_override_is_rejected() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let fare = fx
            .svc
            .create_fare(new_fare("P", Decimal::MAX, dec!(10), 100))
            .await
            .unwrap();

        let err = fx
            .svc
            .set_for_flight(
                &flight.id,
                fare.id,
                FareOverrides::none().price(OverrideValue::Percent(200)),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidOverride { ref field, .. } if field == "price"));
        assert!(fx.svc.get_for_flight(&flight.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_existing_overrides_resolvable() {
        let fx = fixture();
        let subfleet = fx.subfleet().await;
        let fare = fx.fare().await;
        fx.svc
            .set_for_subfleet(
                subfleet.id,
                fare.id,
                FareOverrides::none().capacity(OverrideValue::Percent(200)),
            )
            .await
            .unwrap();

        // 1.5 billion seats tripled no longer fits a seat count
        let mut bigger = fare.clone();
        bigger.capacity = 1_500_000_000;
        let err = fx.svc.update_fare(bigger).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let stored = fx.svc.get_fare(fare.id).await.unwrap();
        assert_eq!(stored.capacity, 150);
        let fares = fx.svc.get_for_subfleet(subfleet.id).await.unwrap();
        assert_eq!(fares[0].capacity, 450);

        // changes that still resolve go through
        let mut cheaper = fare.clone();
        cheaper.price = dec!(99.00);
        assert_eq!(fx.svc.update_fare(cheaper).await.unwrap().price, dec!(99.00));
    }

    #[tokio::test]
    async fn update_of_missing_fare_is_not_found() {
        let fx = fixture();
        let mut ghost = new_fare("G", dec!(1), dec!(1), 1);
        ghost.id = 4242;
        assert!(matches!(
            fx.svc.update_fare(ghost).await,
            Err(DomainError::NotFound { entity: "Fare", .. })
        ));
    }

    #[tokio::test]
    async fn flight_override_resolves_against_fare_not_subfleet() {
        let fx = fixture();
        let subfleet = fx.subfleet().await;
        let flight = fx.flight(Some(subfleet.id)).await;
        let fare = fx.fare().await;

        fx.svc
            .set_for_subfleet(
                subfleet.id,
                fare.id,
                FareOverrides::none().price(OverrideValue::Percent(100)),
            )
            .await
            .unwrap();
        fx.svc
            .set_for_flight(
                &flight.id,
                fare.id,
                FareOverrides::none().price(OverrideValue::Percent(20)),
            )
            .await
            .unwrap();

        let all = fx.svc.get_all_fares(&flight.id).await.unwrap();
        assert_eq!(all.len(), 1);
        // 250.75 * 1.2, not 501.50 * 1.2
        assert_eq!(all[0].price, dec!(300.90));
    }

    #[tokio::test]
    async fn all_fares_layers_flight_over_subfleet() {
        let fx = fixture();
        let subfleet = fx.subfleet().await;
        let flight = fx.flight(Some(subfleet.id)).await;
        let economy = fx.fare_with_code("Y").await;
        let business = fx.fare_with_code("J").await;
        let first = fx.fare_with_code("F").await;

        fx.svc
            .set_for_subfleet(subfleet.id, economy.id, FareOverrides::none().capacity(300))
            .await
            .unwrap();
        fx.svc
            .set_for_subfleet(subfleet.id, business.id, FareOverrides::none().price(900))
            .await
            .unwrap();
        fx.svc
            .set_for_flight(&flight.id, business.id, FareOverrides::none().price(1200))
            .await
            .unwrap();
        fx.svc
            .set_for_flight(&flight.id, first.id, FareOverrides::none())
            .await
            .unwrap();

        let all = fx.svc.get_all_fares(&flight.id).await.unwrap();
        let codes: Vec<&str> = all.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, ["F", "J", "Y"]);
        assert_eq!(all[0].price, first.price);
        assert_eq!(all[1].price, dec!(1200));
        assert_eq!(all[2].capacity, 300);

        // subfleet view is untouched by the flight override
        let sf = fx.svc.get_for_subfleet(subfleet.id).await.unwrap();
        let j = sf.iter().find(|f| f.code == "J").unwrap();
        assert_eq!(j.price, dec!(900));
    }

    #[tokio::test]
    async fn all_fares_without_subfleet_is_flight_only() {
        let fx = fixture();
        let flight = fx.flight(None).await;
        let fare = fx.fare().await;
        fx.svc
            .set_for_flight(&flight.id, fare.id, FareOverrides::none())
            .await
            .unwrap();
        assert_eq!(fx.svc.get_all_fares(&flight.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleting_one_link_leaves_others_and_fare_defaults() {
        let fx = fixture();
        let subfleet = fx.subfleet().await;
        let flight = fx.flight(None).await;
        let fare = fx.fare().await;

        fx.svc
            .set_for_subfleet(subfleet.id, fare.id, FareOverrides::none().price(1))
            .await
            .unwrap();
        fx.svc
            .set_for_flight(&flight.id, fare.id, FareOverrides::none().price(2))
            .await
            .unwrap();
        fx.svc.del_fare_from_flight(&flight.id, fare.id).await.unwrap();

        assert_eq!(fx.svc.get_for_subfleet(subfleet.id).await.unwrap().len(), 1);
        assert_eq!(fx.svc.get_fare(fare.id).await.unwrap().price, dec!(250.75));
    }

    #[tokio::test]
    async fn catalog_crud() {
        let fx = fixture();
        let mut fare = fx.fare().await;
        assert_eq!(fx.svc.list_fares().await.unwrap().len(), 1);

        fare.price = dec!(99.99);
        let updated = fx.svc.update_fare(fare.clone()).await.unwrap();
        assert_eq!(updated.price, dec!(99.99));

        fx.svc.delete_fare(fare.id).await.unwrap();
        assert!(matches!(
            fx.svc.get_fare(fare.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn create_fare_validates_fields() {
        let fx = fixture();
        let err = fx
            .svc
            .create_fare(new_fare(" ", dec!(1), dec!(1), 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = fx
            .svc
            .create_fare(new_fare("Y", dec!(-1), dec!(1), 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
