/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::sync::Arc;
use async_trait::async_trait;
use log::{error, info};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use serde_json::{json, Value};
use crate::entities::db_model::detail_db_model::{Column, Entity, Model};
use crate::entities::inner_model::detail_content::{Attachment, DetailPatch, NewDetail};
use crate::error::achievement_error::AchievementError;
use crate::stores::detail_store::DetailStore;

pub struct DetailDbRepo {
    db: Arc<DatabaseConnection>,
}

impl DetailDbRepo {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn missing(detail_id: &str) -> AchievementError {
        AchievementError::InternalConsistency(format!("detail document {} is missing", detail_id))
    }
}

#[async_trait]
impl DetailStore for DetailDbRepo {
    async fn create(&self, content: NewDetail) -> Result<String, AchievementError> {
        let now = chrono::Utc::now().timestamp_millis();
        let id = uuid::Uuid::new_v4().to_string();
        let model = Model {
            id: id.clone(),
            reference_id: content.reference_id,
            student_id: content.student_id,
            achievement_type: content.achievement_type,
            title: content.title,
            description: content.description,
            details: content.details,
            tags: json!(content.tags),
            points: content.points,
            attachments: json!([]),
            created_at: now,
            updated_at: now,
        };
        Entity::insert(model.into_active_model()).exec_without_returning(&*self.db).await?;
        Ok(id)
    }

    async fn find_by_id(&self, detail_id: &str) -> Result<Option<Model>, AchievementError> {
        Ok(Entity::find_by_id(detail_id.to_string()).one(&*self.db).await?)
    }

    async fn update(&self, detail_id: &str, patch: DetailPatch) -> Result<(), AchievementError> {
        let mut update =
            Entity::update_many().col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp_millis()));
        if let Some(achievement_type) = patch.achievement_type {
            update = update.col_expr(Column::AchievementType, Expr::value(achievement_type));
        }
        if let Some(title) = patch.title {
            update = update.col_expr(Column::Title, Expr::value(title));
        }
        if let Some(description) = patch.description {
            update = update.col_expr(Column::Description, Expr::value(description));
        }
        if let Some(details) = patch.details {
            update = update.col_expr(Column::Details, Expr::value(details));
        }
        if let Some(tags) = patch.tags {
            update = update.col_expr(Column::Tags, Expr::value(json!(tags)));
        }
        if let Some(points) = patch.points {
            update = update.col_expr(Column::Points, Expr::value(points));
        }
        let result = update.filter(Column::Id.eq(detail_id)).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(Self::missing(detail_id));
        }
        Ok(())
    }

    /// Read-modify-write of the attachment list under a row lock so concurrent uploads keep both files.
    async fn append_attachment(&self, detail_id: &str, attachment: Attachment) -> Result<(), AchievementError> {
        let txn = self.db.begin().await?;
        let row = Entity::find_by_id(detail_id.to_string()).lock_exclusive().one(&txn).await?;
        let Some(row) = row else {
            txn.rollback().await?;
            return Err(Self::missing(detail_id));
        };
        let mut attachments: Vec<Value> = match row.attachments {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            _ => {
                txn.rollback().await?;
                return Err(AchievementError::InternalConsistency(format!(
                    "malformed attachments in detail {}",
                    detail_id
                )));
            },
        };
        let file_name = attachment.file_name.clone();
        attachments.push(json!(attachment));
        Entity::update_many()
            .col_expr(Column::Attachments, Expr::value(Value::Array(attachments)))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp_millis()))
            .filter(Column::Id.eq(detail_id))
            .exec(&txn)
            .await?;
        txn.commit().await?;
        info!("attached {} to detail {}", file_name, detail_id);
        Ok(())
    }

    async fn delete(&self, detail_id: &str) -> Result<(), AchievementError> {
        let result = Entity::delete_by_id(detail_id.to_string()).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            error!("detail {} was already gone when deleting", detail_id);
        }
        Ok(())
    }

    async fn scan(&self, student_ids: Option<Vec<String>>) -> Result<Vec<Model>, AchievementError> {
        let mut query = Entity::find();
        if let Some(ids) = student_ids {
            query = query.filter(Column::StudentId.is_in(ids));
        }
        Ok(query.order_by_asc(Column::CreatedAt).all(&*self.db).await?)
    }
}
