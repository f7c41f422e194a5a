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

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use crate::entities::db_model::role_db_model::{Column, Entity, Model};
use crate::entities::db_model::{permission_db_model, role_permission_db_model};
use crate::error::account_error::AccountError;

pub struct RoleRepository {}

impl RoleRepository {
    pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, AccountError> {
        Ok(Entity::find().filter(Column::Name.eq(name)).one(db).await?)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, AccountError> {
        Ok(Entity::find_by_id(id.to_string()).one(db).await?)
    }

    pub async fn find_by_ids(db: &DatabaseConnection, ids: Vec<String>) -> Result<Vec<Model>, AccountError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Entity::find().filter(Column::Id.is_in(ids)).all(db).await?)
    }

    /// Names of every permission granted to `role_id`, sorted.
    pub async fn permission_names(db: &DatabaseConnection, role_id: &str) -> Result<Vec<String>, AccountError> {
        let grants = role_permission_db_model::Entity::find()
            .filter(role_permission_db_model::Column::RoleId.eq(role_id))
            .all(db)
            .await?;
        if grants.is_empty() {
            return Ok(Vec::new());
        }
        let permission_ids: Vec<String> = grants.into_iter().map(|g| g.permission_id).collect();
        let permissions = permission_db_model::Entity::find()
            .filter(permission_db_model::Column::Id.is_in(permission_ids))
            .order_by_asc(permission_db_model::Column::Name)
            .all(db)
            .await?;
        Ok(permissions.into_iter().map(|p| p.name).collect())
    }
}
