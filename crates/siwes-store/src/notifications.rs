//! Repository operations for [`Notification`] records and their read flag.

use chrono::Utc;

use siwes_shared::{validate, NotificationId, UserId};

use crate::error::{Result, StoreError};
use crate::models::{NewNotification, Notification};
use crate::store::Store;

impl Store {
    /// Queue an unread notification for a user.
    pub fn add_notification(&mut self, input: NewNotification) -> Result<Notification> {
        validate::require_field("title", &input.title)?;

        let notification = Notification {
            id: NotificationId::generate(),
            user_id: input.user_id,
            title: input.title,
            message: input.message,
            is_read: false,
            created_at: Utc::now(),
        };

        self.insert_notification(notification.clone())?;
        tracing::info!(
            notification_id = %notification.id,
            user_id = %notification.user_id,
            title = %notification.title,
            "notification added"
        );
        Ok(notification)
    }

    pub(crate) fn insert_notification(&mut self, notification: Notification) -> Result<()> {
        if self.notifications.contains(&notification.id) {
            return Err(StoreError::DuplicateId(notification.id.to_string()));
        }
        self.notifications.insert(
            notification.id.clone(),
            notification.user_id.clone(),
            notification,
        );
        Ok(())
    }

    /// Notifications addressed to `user_id`, oldest first.
    pub fn get_notifications(&self, user_id: &UserId) -> Vec<&Notification> {
        self.notifications.owned_by(user_id).collect()
    }

    pub fn unread_notification_count(&self, user_id: &UserId) -> usize {
        self.notifications
            .owned_by(user_id)
            .filter(|n| !n.is_read)
            .count()
    }

    /// Flag a notification as read.  Idempotent; `None` if it does not exist.
    pub fn mark_notification_read(&mut self, id: &NotificationId) -> Option<Notification> {
        let notification = self.notifications.get_mut(id)?;
        if !notification.is_read {
            notification.is_read = true;
            tracing::debug!(notification_id = %id, "notification read");
        }
        Some(notification.clone())
    }
}
