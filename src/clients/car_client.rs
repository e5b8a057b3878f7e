use crate::car_actor::CarError;
use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::Car;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Car actor.
#[derive(Clone)]
pub struct CarClient {
    inner: ResourceClient<Car>,
}

impl CarClient {
    pub fn new(inner: ResourceClient<Car>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, car))]
    pub async fn create_car(&self, car: impl Into<Option<Car>> + Send) -> Result<Car, CarError> {
        let car = car.into();
        debug!(?car, "create_car called");
        self.inner.create(car).await.map_err(Into::into)
    }

    #[instrument(skip(self, car))]
    pub async fn update_car(
        &self,
        car: impl Into<Option<Car>> + Send,
    ) -> Result<Option<Car>, CarError> {
        let car = car.into();
        debug!(?car, "update_car called");
        self.inner.update(car).await.map_err(Into::into)
    }
}

#[async_trait]
impl ActorClient<Car> for CarClient {
    type Error = CarError;

    fn inner(&self) -> &ResourceClient<Car> {
        &self.inner
    }
}
