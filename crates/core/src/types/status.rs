//! Status enums for platform entities.
//!
//! The shipment lifecycle is the one piece of real state structure in the
//! admin panel, so its transition table lives here as pure functions rather
//! than in the view layer. The platform re-validates every transition; this
//! table decides which actions the panel offers at all.

use serde::{Deserialize, Serialize};

/// Shipment lifecycle status.
///
/// Allowed transitions:
///
/// ```text
/// preparing -> shipped | cancelled
/// shipped   -> delivered | cancelled
/// delivered -> (terminal)
/// cancelled -> (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Preparing,
    Shipped,
    Delivered,
    Cancelled,
}

impl ShipmentStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Preparing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Statuses reachable from `self` in a single transition.
    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        match self {
            Self::Preparing => &[Self::Shipped, Self::Cancelled],
            Self::Shipped => &[Self::Delivered, Self::Cancelled],
            Self::Delivered | Self::Cancelled => &[],
        }
    }

    /// Whether a single transition from `self` to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Human-readable label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preparing => "Preparing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preparing => write!(f, "preparing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for ShipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preparing" => Ok(Self::Preparing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid shipment status: {s}")),
        }
    }
}

/// Order status as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Paid,
        Self::Shipped,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Human-readable label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Shipped => "Shipped",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Shipped => write!(f, "shipped"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Product listing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    /// All statuses.
    pub const ALL: [Self; 3] = [Self::Active, Self::Draft, Self::Archived];

    /// Human-readable label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Draft => write!(f, "draft"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "draft" => Ok(Self::Draft),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("invalid product status: {s}")),
        }
    }
}

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Order,
    Stock,
    System,
}

impl NotificationKind {
    /// All kinds.
    pub const ALL: [Self; 4] = [Self::Info, Self::Order, Self::Stock, Self::System];

    /// Human-readable label for the kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Order => "Order",
            Self::Stock => "Stock",
            Self::System => "System",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Order => write!(f, "order"),
            Self::Stock => write!(f, "stock"),
            Self::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "order" => Ok(Self::Order),
            "stock" => Ok(Self::Stock),
            "system" => Ok(Self::System),
            _ => Err(format!("invalid notification kind: {s}")),
        }
    }
}

/// Platform user role.
///
/// Roles come back from `POST /api/auth/login` and gate access to the admin
/// panel. Customers can authenticate against the platform but are never
/// admitted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access to all panel features including user management.
    Admin,
    /// Full access to store management features.
    Staff,
    /// Storefront customer - no panel access.
    Customer,
}

impl UserRole {
    /// Whether this role is admitted to the admin panel at all.
    #[must_use]
    pub const fn has_panel_access(self) -> bool {
        matches!(self, Self::Admin | Self::Staff)
    }

    /// Whether this role may manage platform users.
    #[must_use]
    pub const fn can_manage_users(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Human-readable label for the role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Staff => "Staff",
            Self::Customer => "Customer",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Staff => write!(f, "staff"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "customer" => Ok(Self::Customer),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shipment_transition_table() {
        use ShipmentStatus::{Cancelled, Delivered, Preparing, Shipped};

        // The full table, every pair.
        let allowed = [
            (Preparing, Shipped),
            (Preparing, Cancelled),
            (Shipped, Delivered),
            (Shipped, Cancelled),
        ];

        for from in ShipmentStatus::ALL {
            for to in ShipmentStatus::ALL {
                let expected = allowed.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "transition {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_shipment_terminal_states() {
        assert!(!ShipmentStatus::Preparing.is_terminal());
        assert!(!ShipmentStatus::Shipped.is_terminal());
        assert!(ShipmentStatus::Delivered.is_terminal());
        assert!(ShipmentStatus::Cancelled.is_terminal());

        assert!(ShipmentStatus::Delivered.allowed_transitions().is_empty());
        assert!(ShipmentStatus::Cancelled.allowed_transitions().is_empty());
    }

    #[test]
    fn test_shipment_no_self_transitions() {
        for status in ShipmentStatus::ALL {
            assert!(!status.can_transition_to(status), "self loop on {status}");
        }
    }

    #[test]
    fn test_shipment_status_roundtrip() {
        for status in ShipmentStatus::ALL {
            let parsed: ShipmentStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("in_transit".parse::<ShipmentStatus>().is_err());
    }

    #[test]
    fn test_shipment_status_serde() {
        let json = serde_json::to_string(&ShipmentStatus::Preparing).unwrap();
        assert_eq!(json, "\"preparing\"");

        let parsed: ShipmentStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(parsed, ShipmentStatus::Delivered);
    }

    #[test]
    fn test_order_status_roundtrip() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_product_status_roundtrip() {
        for status in ProductStatus::ALL {
            let parsed: ProductStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_notification_kind_roundtrip() {
        for kind in NotificationKind::ALL {
            let parsed: NotificationKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_panel_access() {
        assert!(UserRole::Admin.has_panel_access());
        assert!(UserRole::Staff.has_panel_access());
        assert!(!UserRole::Customer.has_panel_access());
    }

    #[test]
    fn test_user_management_is_admin_only() {
        assert!(UserRole::Admin.can_manage_users());
        assert!(!UserRole::Staff.can_manage_users());
        assert!(!UserRole::Customer.can_manage_users());
    }

    #[test]
    fn test_user_role_serde() {
        let parsed: UserRole = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(parsed, UserRole::Staff);
    }
}
