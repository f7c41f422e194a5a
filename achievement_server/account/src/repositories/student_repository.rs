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

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use crate::entities::db_model::student_db_model::{Column, Entity, Model};
use crate::entities::inner_model::page::Page;
use crate::error::account_error::AccountError;

pub struct StudentRepository {}

impl StudentRepository {
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

    pub async fn list_by_advisor(db: &DatabaseConnection, lecturer_id: &str, page: Page) -> Result<Vec<Model>, AccountError> {
        Ok(Entity::find()
            .filter(Column::AdvisorId.eq(lecturer_id))
            .order_by_desc(Column::CreatedAt)
            .limit(page.limit)
            .offset(page.offset)
            .all(db)
            .await?)
    }

    /// Ids of every student advised by `lecturer_id`, unpaginated.
    pub async fn advisee_ids(db: &DatabaseConnection, lecturer_id: &str) -> Result<Vec<String>, AccountError> {
        let students = Entity::find()
            .filter(Column::AdvisorId.eq(lecturer_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await?;
        Ok(students.into_iter().map(|s| s.id).collect())
    }

    /// Overwrites any previous advisor; returns the number of rows touched.
    pub async fn set_advisor(db: &DatabaseConnection, student_id: &str, lecturer_id: &str) -> Result<u64, AccountError> {
        let result = Entity::update_many()
            .col_expr(Column::AdvisorId, Expr::value(lecturer_id))
            .filter(Column::Id.eq(student_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
