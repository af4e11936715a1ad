//! Exit handling: restore the terminal on signals and at exit.

/// Put the tty back into cooked mode with echo, using termios directly so
/// it is safe to call from a signal context.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit, so it runs on every normal exit.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Only emit escape codes to a terminal, never into a pipe.
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            const SHOW_CURSOR: &[u8] = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                SHOW_CURSOR.as_ptr() as *const libc::c_void,
                SHOW_CURSOR.len(),
            );
        }
    }
}

/// Exit status for an interrupted run (128 + SIGINT).
pub const INTERRUPTED: i32 = 130;

/// SIGINT/SIGTERM/SIGHUP: exit, atexit does the cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(INTERRUPTED) }
}

/// Install signal handlers and the atexit hook. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps and ptrace.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
