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

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use crate::entities::db_model::lecturer_db_model::{Column, Entity, Model};
use crate::entities::inner_model::page::Page;
use crate::error::account_error::AccountError;

pub struct LecturerRepository {}

impl LecturerRepository {
    pub async fn list(db: &DatabaseConnection, page: Page) -> Result<Vec<Model>, AccountError> {
        Ok(Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(page.limit)
            .offset(page.offset)
            .all(db)
            .await?)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, AccountError> {
        Ok(Entity::find_by_id(id.to_string()).one(db).await?)
    }

    pub async fn find_by_user_id(db: &DatabaseConnection, user_id: &str) -> Result<Option<Model>, AccountError> {
        Ok(Entity::find().filter(Column::UserId.eq(user_id)).one(db).await?)
    }
}
