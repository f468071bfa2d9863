//! # Dynamic Library Handle
//!
//! Thin wrapper over `dlopen`/`LoadLibraryW`. Only used to resolve the
//! `compute_hash` entry point.

use std::ffi::c_void;
use std::path::Path;

use crate::error::{HashError, HashResult};

/// `uint64_t compute_hash(const uint8_t *buf, uint32_t len)`
pub(crate) type ComputeHashFn = unsafe extern "C" fn(*const u8, u32) -> u64;

/// An opened shared library, closed on drop
pub(crate) struct Library {
    handle: *mut c_void,
}

// The handle is only read after open; the loader APIs are thread safe.
unsafe impl Send for Library {}
unsafe impl Sync for Library {}

impl Library {
    pub fn open(path: &Path) -> HashResult<Self> {
        let handle = sys::open(path).map_err(|e| {
            HashError::unavailable(format!("failed to load {}: {}", path.display(), e))
        })?;
        Ok(Self { handle })
    }

    /// Resolve `name` as a [`ComputeHashFn`].
    ///
    /// # Safety
    /// The caller asserts the exported symbol has the `ComputeHashFn` signature.
    pub unsafe fn compute_hash_fn(&self, name: &str) -> HashResult<ComputeHashFn> {
        let sym = sys::symbol(self.handle, name)
            .map_err(|e| HashError::unavailable(format!("symbol '{}' not resolved: {}", name, e)))?;
        Ok(std::mem::transmute::<*mut c_void, ComputeHashFn>(sym))
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        sys::close(self.handle);
    }
}

#[cfg(unix)]
mod sys {
    use std::ffi::{c_void, CStr, CString};
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    pub fn open(path: &Path) -> Result<*mut c_void, String> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| "path contains a NUL byte".to_string())?;

        let handle = unsafe { libc::dlopen(c_path.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        if handle.is_null() {
            Err(last_error())
        } else {
            Ok(handle)
        }
    }

    pub fn symbol(handle: *mut c_void, name: &str) -> Result<*mut c_void, String> {
        let c_name = CString::new(name).map_err(|_| "symbol contains a NUL byte".to_string())?;

        unsafe {
            libc::dlerror();
            let sym = libc::dlsym(handle, c_name.as_ptr());
            if sym.is_null() {
                Err(last_error())
            } else {
                Ok(sym)
            }
        }
    }

    pub fn close(handle: *mut c_void) {
        unsafe {
            libc::dlclose(handle);
        }
    }

    fn last_error() -> String {
        let msg = unsafe { libc::dlerror() };
        if msg.is_null() {
            "unknown dynamic loader error".to_string()
        } else {
            unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
        }
    }
}

#[cfg(windows)]
mod sys {
    use std::ffi::{c_void, CString};
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;

    use windows::core::{PCSTR, PCWSTR};
    use windows::Win32::Foundation::{FreeLibrary, HMODULE};
    use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};

    pub fn open(path: &Path) -> Result<*mut c_void, String> {
        let wide: Vec<u16> = path.as_os_str().encode_wide().chain(Some(0)).collect();

        let module = unsafe { LoadLibraryW(PCWSTR(wide.as_ptr())) }.map_err(|e| e.to_string())?;
        Ok(module.0)
    }

    pub fn symbol(handle: *mut c_void, name: &str) -> Result<*mut c_void, String> {
        let c_name = CString::new(name).map_err(|_| "symbol contains a NUL byte".to_string())?;

        let proc = unsafe { GetProcAddress(HMODULE(handle), PCSTR(c_name.as_ptr() as *const u8)) };
        proc.map(|f| f as *mut c_void)
            .ok_or_else(|| "GetProcAddress returned null".to_string())
    }

    pub fn close(handle: *mut c_void) {
        let _ = unsafe { FreeLibrary(HMODULE(handle)) };
    }
}

#[cfg(not(any(unix, windows)))]
mod sys {
    use std::ffi::c_void;
    use std::path::Path;

    pub fn open(_path: &Path) -> Result<*mut c_void, String> {
        Err("dynamic loading is not supported on this target".to_string())
    }

    pub fn symbol(_handle: *mut c_void, _name: &str) -> Result<*mut c_void, String> {
        Err("dynamic loading is not supported on this target".to_string())
    }

    pub fn close(_handle: *mut c_void) {}
}
