use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityName, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Select,
};
use std::collections::HashMap;

/// An entity whose rows are hidden by a `deleted_at` timestamp instead of being removed.
///
/// Every default read made through [`Gateway`] filters on `deleted_at IS NULL`.
pub trait SoftDeletable: EntityTrait {
    fn id_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
    fn id_of(model: &Self::Model) -> i64;
}

/// Persistence gateway shared by every repository.
///
/// Wraps the pooled connection; cloning is cheap and clones share the pool.
#[derive(Clone, Debug)]
pub struct Gateway {
    db: DatabaseConnection,
}

impl Gateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Base query for default reads: live rows only.
    pub fn select<E: SoftDeletable>() -> Select<E> {
        E::find().filter(E::deleted_at_column().is_null())
    }

    pub async fn all<E>(&self) -> Result<Vec<E::Model>, DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync + Send + 'static,
    {
        Self::select::<E>()
            .order_by_asc(E::id_column())
            .all(&self.db)
            .await
    }

    pub async fn find<E>(&self, condition: Condition) -> Result<Vec<E::Model>, DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync + Send + 'static,
    {
        Self::select::<E>()
            .filter(condition)
            .order_by_asc(E::id_column())
            .all(&self.db)
            .await
    }

    /// Fetches one live row by id.
    ///
    /// Absent and soft-deleted rows both come back as `DbErr::RecordNotFound`.
    pub async fn first<E>(&self, id: i64) -> Result<E::Model, DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync + Send + 'static,
    {
        Self::select::<E>()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }

    pub async fn create<E>(&self, active_model: E::ActiveModel) -> Result<E::Model, DbErr>
    where
        E: SoftDeletable,
        E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send + 'static,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        active_model.insert(&self.db).await
    }

    /// Persists the set fields of `active_model` and refreshes `updated_at`.
    pub async fn update<E>(&self, mut active_model: E::ActiveModel) -> Result<E::Model, DbErr>
    where
        E: SoftDeletable,
        E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send + 'static,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        active_model.set(E::updated_at_column(), Utc::now().into());
        active_model.update(&self.db).await
    }

    /// Soft-deletes one row. Deleting an absent or already-deleted row is `RecordNotFound`.
    pub async fn delete<E>(&self, id: i64) -> Result<(), DbErr>
    where
        E: SoftDeletable,
    {
        let now = Utc::now();
        let result = E::update_many()
            .col_expr(E::deleted_at_column(), Expr::value(now))
            .col_expr(E::updated_at_column(), Expr::value(now))
            .filter(E::id_column().eq(id))
            .filter(E::deleted_at_column().is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(not_found::<E>(id));
        }
        Ok(())
    }

    /// Live rows whose id is in `ids`, keyed by id.
    pub async fn find_by_ids<E>(&self, ids: &[i64]) -> Result<HashMap<i64, E::Model>, DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync + Send + 'static,
    {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Self::select::<E>()
            .filter(E::id_column().is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(|m| (E::id_of(&m), m)).collect())
    }

    /// Live rows whose `fk_column` points at one of `parent_ids`, ordered by id.
    pub async fn find_children<E>(
        &self,
        fk_column: E::Column,
        parent_ids: &[i64],
    ) -> Result<Vec<E::Model>, DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync + Send + 'static,
    {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }

        Self::select::<E>()
            .filter(fk_column.is_in(parent_ids.iter().copied()))
            .order_by_asc(E::id_column())
            .all(&self.db)
            .await
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}

fn not_found<E: EntityName>(id: i64) -> DbErr {
    DbErr::RecordNotFound(format!("{} with id {} not found", E::default().table_name(), id))
}
