// File: coordinate.rs
// Description: 3D coordinate type and vector operations on CA positions

#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Coordinate {
    pub fn new(x: f32, y: f32, z: f32) -> Coordinate {
        Coordinate { x, y, z }
    }
    pub fn add(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
    pub fn sub(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
    pub fn dot(&self, other: &Coordinate) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    pub fn cross(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
    pub fn normalize(&self) -> Coordinate {
        let norm = self.norm();
        Coordinate {
            x: self.x / norm,
            y: self.y / norm,
            z: self.z / norm,
        }
    }
    pub fn scale(&self, factor: f32) -> Coordinate {
        Coordinate {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
    pub fn distance(&self, other: &Coordinate) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
    /// Angle between two vectors in degrees. Cosine is clamped so that
    /// rounding never pushes it outside acos's domain.
    pub fn angle_deg(&self, other: &Coordinate) -> f32 {
        let cos = self.dot(other) / (self.norm() * other.norm());
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    }
}

#[cfg(test)]
mod coordinate_tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Coordinate::new(1.0, 2.0, 3.0);
        let b = Coordinate::new(4.0, 5.0, 6.0);
        assert_eq!(a.add(&b), Coordinate::new(5.0, 7.0, 9.0));
        assert_eq!(a.sub(&b), Coordinate::new(-3.0, -3.0, -3.0));
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(a.scale(2.0), Coordinate::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Coordinate::new(1.0, 2.0, 3.0);
        let b = Coordinate::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);
        assert!(c.dot(&a).abs() < 1e-4);
        assert!(c.dot(&b).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_and_norm() {
        let a = Coordinate::new(3.0, 0.0, 4.0);
        assert_eq!(a.norm(), 5.0);
        let n = a.normalize();
        assert!((n.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_deg() {
        let x = Coordinate::new(1.0, 0.0, 0.0);
        let y = Coordinate::new(0.0, 2.0, 0.0);
        assert!((x.angle_deg(&y) - 90.0).abs() < 1e-3);
        assert!(x.angle_deg(&x).abs() < 1e-3);
        let neg = Coordinate::new(-1.0, 0.0, 0.0);
        assert!((x.angle_deg(&neg) - 180.0).abs() < 1e-3);
    }
}
