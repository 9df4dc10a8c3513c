//! Instance packing for impostor renderers.
//!
//! Every impostor shader reads one storage buffer of fixed-layout
//! instances. [`PreparedInstances`] holds those arrays for a
//! [`MoleculeGroup`] and exposes them as raw bytes ready for upload.

pub mod capsule;
pub mod sphere;

pub use capsule::CapsuleInstance;
pub use sphere::SphereInstance;

use crate::renderer::geometry::MoleculeGroup;

/// Sphere and capsule instances for one molecule group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedInstances {
    /// One instance per atom sphere.
    pub spheres: Vec<SphereInstance>,
    /// One instance per bond strand.
    pub capsules: Vec<CapsuleInstance>,
}

impl PreparedInstances {
    /// Pack every primitive of `group`.
    #[must_use]
    pub fn from_group(group: &MoleculeGroup) -> Self {
        Self {
            spheres: group.spheres().map(SphereInstance::from).collect(),
            capsules: group.cylinders().map(CapsuleInstance::from).collect(),
        }
    }

    /// Raw bytes of the sphere instance array.
    #[must_use]
    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }

    /// Raw bytes of the capsule instance array.
    #[must_use]
    pub fn capsule_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.capsules)
    }

    /// Number of sphere instances.
    #[must_use]
    pub fn sphere_count(&self) -> u32 {
        self.spheres.len() as u32
    }

    /// Number of capsule instances.
    #[must_use]
    pub fn capsule_count(&self) -> u32 {
        self.capsules.len() as u32
    }
}
