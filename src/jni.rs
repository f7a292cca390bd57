//! JNI bindings for the robot JVM
//!
//! This module provides the library lifecycle hooks and the native
//! implementation of `frc.team1891.common.jni.BullBotsLibJNI`.

#![allow(non_snake_case)]

use std::ffi::c_void;
use std::ptr;

use jni::objects::JClass;
use jni::sys::{self, jint, JNI_ERR, JNI_OK, JNI_VERSION_1_6};
use jni::JNIEnv;
use log::debug;

/// JNI interface version this library is built against.
pub const REQUIRED_JNI_VERSION: jint = JNI_VERSION_1_6;

/// Called by the JVM when it loads the library.
///
/// Checks that the JVM can hand out a [`REQUIRED_JNI_VERSION`] environment
/// and reports that version back so the JVM knows which interface contract
/// to use. Returns `JNI_ERR` on an incompatible JVM, which aborts the load.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(vm: *mut sys::JavaVM, _reserved: *mut c_void) -> jint {
    if vm.is_null() || unsafe { (*vm).is_null() } {
        return JNI_ERR;
    }
    let get_env = match unsafe { (**vm).GetEnv } {
        Some(get_env) => get_env,
        None => return JNI_ERR,
    };

    let mut env: *mut c_void = ptr::null_mut();
    if unsafe { get_env(vm, &mut env, REQUIRED_JNI_VERSION) } != JNI_OK {
        return JNI_ERR;
    }

    // Class references that must outlive a single call would be looked up
    // and stored here; nothing is cached yet.

    debug!("native library loaded, JNI version {:#x}", REQUIRED_JNI_VERSION);
    REQUIRED_JNI_VERSION
}

/// Called by the JVM when it unloads the library. Nothing to release,
/// since the load hook holds on to nothing.
#[no_mangle]
pub extern "system" fn JNI_OnUnload(_vm: *mut sys::JavaVM, _reserved: *mut c_void) {
    debug!("native library unloaded");
}

/// Native implementation of `BullBotsLibJNI.initialize()`.
#[no_mangle]
pub extern "system" fn Java_frc_team1891_common_jni_BullBotsLibJNI_initialize(
    _env: JNIEnv,
    _class: JClass,
) -> jint {
    crate::initialize()
}
