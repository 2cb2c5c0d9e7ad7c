//! Virtual machine identifiers and their display names.

use crate::id::{Id, VmId};

pub const PLATFORM_VM_NAME: &str = "platformvm";
pub const XVM_NAME: &str = "xvm";
pub const EVM_NAME: &str = "evm";
pub const XSVM_NAME: &str = "xsvm";
pub const QUANTUM_VM_NAME: &str = "quantumvm";
pub const AI_VM_NAME: &str = "aivm";
pub const BRIDGE_VM_NAME: &str = "bridgevm";
pub const THRESHOLD_VM_NAME: &str = "thresholdvm";
pub const ZK_VM_NAME: &str = "zkvm";
pub const GRAPH_VM_NAME: &str = "graphvm";
pub const DEX_VM_NAME: &str = "dexvm";

pub const PLATFORM_VM_ID: VmId = Id::from_tag(b"platformvm");
/// Exchange chain VM. Keeps its historical `avm` tag.
pub const EXCHANGE_VM_ID: VmId = Id::from_tag(b"avm");
pub const XVM_ID: VmId = EXCHANGE_VM_ID;
pub const CONTRACT_VM_ID: VmId = Id::from_tag(b"evm");
pub const EVM_ID: VmId = CONTRACT_VM_ID;
pub const XSVM_ID: VmId = Id::from_tag(b"xsvm");
pub const QUANTUM_VM_ID: VmId = Id::from_tag(b"quantumvm");
pub const ATTESTATION_VM_ID: VmId = Id::from_tag(b"aivm");
pub const AI_VM_ID: VmId = ATTESTATION_VM_ID;
pub const BRIDGE_VM_ID: VmId = Id::from_tag(b"bridgevm");
pub const THRESHOLD_VM_ID: VmId = Id::from_tag(b"thresholdvm");
pub const ZK_VM_ID: VmId = Id::from_tag(b"zkvm");
pub const GRAPH_VM_ID: VmId = Id::from_tag(b"graphvm");
pub const DEX_VM_ID: VmId = Id::from_tag(b"dexvm");

/// Every known VM, in display order.
pub const KNOWN_VMS: &[(VmId, &str)] = &[
    (PLATFORM_VM_ID, PLATFORM_VM_NAME),
    (XVM_ID, XVM_NAME),
    (EVM_ID, EVM_NAME),
    (XSVM_ID, XSVM_NAME),
    (QUANTUM_VM_ID, QUANTUM_VM_NAME),
    (AI_VM_ID, AI_VM_NAME),
    (BRIDGE_VM_ID, BRIDGE_VM_NAME),
    (THRESHOLD_VM_ID, THRESHOLD_VM_NAME),
    (ZK_VM_ID, ZK_VM_NAME),
    (GRAPH_VM_ID, GRAPH_VM_NAME),
    (DEX_VM_ID, DEX_VM_NAME),
];

/// Human readable VM name, or the hex form of the ID when unknown.
pub fn vm_name(vm_id: &VmId) -> String {
    KNOWN_VMS
        .iter()
        .find(|(id, _)| id == vm_id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| vm_id.to_string())
}

pub fn vm_id(name: &str) -> Option<VmId> {
    KNOWN_VMS
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(id, _)| *id)
}
