use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use domain::{
    Customer, CustomerRepository, DomainError, Entity, Order, OrderRepository, Product,
    ProductRepository, Repository, Result,
};
use tokio::sync::RwLock;

use crate::records::{CustomerRecord, OrderRecord, ProductRecord};

/// Rows keyed by entity id, kept in id order.
struct Table<R> {
    rows: Arc<RwLock<BTreeMap<EntityId, R>>>,
}

impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<R: Clone> Table<R> {
    async fn insert(&self, entity: &'static str, id: &EntityId, row: R) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(id) {
            return Err(DomainError::AlreadyExists {
                entity,
                id: id.clone(),
            });
        }
        rows.insert(id.clone(), row);
        tracing::debug!(entity, %id, "row inserted");
        Ok(())
    }

    async fn modify(
        &self,
        entity: &'static str,
        id: &EntityId,
        apply: impl FnOnce(&mut R) + Send,
    ) -> Result<()> {
        let mut rows = self.rows.write().await;
        let row = rows
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(entity, id))?;
        apply(row);
        tracing::debug!(entity, %id, "row updated");
        Ok(())
    }

    async fn get(&self, entity: &'static str, id: &EntityId) -> Result<R> {
        self.rows
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(entity, id))
    }

    async fn all(&self) -> Vec<R> {
        self.rows.read().await.values().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    async fn clear(&self) {
        self.rows.write().await.clear();
    }
}

macro_rules! in_memory_repository {
    ($(#[$meta:meta])* $name:ident, $record:ty) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name {
            table: Table<$record>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Returns the number of stored rows.
            pub async fn count(&self) -> usize {
                self.table.len().await
            }

            /// Removes every stored row.
            pub async fn clear(&self) {
                self.table.clear().await;
            }
        }
    };
}

in_memory_repository!(
    /// In-memory customer repository.
    InMemoryCustomerRepository,
    CustomerRecord
);

in_memory_repository!(
    /// In-memory product repository.
    InMemoryProductRepository,
    ProductRecord
);

in_memory_repository!(
    /// In-memory order repository.
    ///
    /// Orders are stored with their item rows and the total at creation time.
    /// Updates only touch the status column.
    InMemoryOrderRepository,
    OrderRecord
);

#[async_trait]
impl Repository<Customer> for InMemoryCustomerRepository {
    async fn create(&self, entity: &Customer) -> Result<()> {
        self.table
            .insert(Customer::entity_type(), entity.id(), entity.into())
            .await
    }

    async fn update(&self, entity: &Customer) -> Result<()> {
        let row = CustomerRecord::from(entity);
        self.table
            .modify(Customer::entity_type(), entity.id(), |stored| *stored = row)
            .await
    }

    async fn find(&self, id: &EntityId) -> Result<Customer> {
        self.table.get(Customer::entity_type(), id).await?.try_into()
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        self.table
            .all()
            .await
            .into_iter()
            .map(Customer::try_from)
            .collect()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {}

#[async_trait]
impl Repository<Product> for InMemoryProductRepository {
    async fn create(&self, entity: &Product) -> Result<()> {
        self.table
            .insert(Product::entity_type(), entity.id(), entity.into())
            .await
    }

    async fn update(&self, entity: &Product) -> Result<()> {
        let row = ProductRecord::from(entity);
        self.table
            .modify(Product::entity_type(), entity.id(), |stored| *stored = row)
            .await
    }

    async fn find(&self, id: &EntityId) -> Result<Product> {
        self.table.get(Product::entity_type(), id).await?.try_into()
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        self.table
            .all()
            .await
            .into_iter()
            .map(Product::try_from)
            .collect()
    }
}

impl ProductRepository for InMemoryProductRepository {}

#[async_trait]
impl Repository<Order> for InMemoryOrderRepository {
    async fn create(&self, entity: &Order) -> Result<()> {
        self.table
            .insert(Order::entity_type(), entity.id(), entity.into())
            .await
    }

    async fn update(&self, entity: &Order) -> Result<()> {
        let status = entity.status();
        self.table
            .modify(Order::entity_type(), entity.id(), |stored| {
                stored.status = status;
            })
            .await
    }

    async fn find(&self, id: &EntityId) -> Result<Order> {
        self.table.get(Order::entity_type(), id).await?.try_into()
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        self.table
            .all()
            .await
            .into_iter()
            .map(Order::try_from)
            .collect()
    }
}

impl OrderRepository for InMemoryOrderRepository {}
